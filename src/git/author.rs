//! Rewrites the `[user]` section of a repository's local git config.

use std::path::Path;

use crate::Result;

/// Patch the repository containing `dir` so its local config carries the
/// given commit author. Returns whether anything was written; not being
/// inside a repository, or a repository without a config file, is a silent
/// no-op rather than an error.
pub fn patch_author_config(dir: &Path, name: &str, email: &str) -> Result<bool> {
    let repo = match git2::Repository::discover(dir) {
        Ok(repo) => repo,
        Err(_) => return Ok(false),
    };

    let config_path = repo.path().join("config");
    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Ok(false),
    };

    std::fs::write(&config_path, apply_user_section(&content, name, email))?;
    Ok(true)
}

/// Replace the body of an existing `[user]` section with the given author,
/// or append a new section. Every line outside the section is preserved
/// as-is; the section body extends to the next `[` header or end of file.
pub fn apply_user_section(content: &str, name: &str, email: &str) -> String {
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
    let body = [format!("\tname = {}", name), format!("\temail = {}", email)];

    match lines.iter().position(|line| line.trim() == "[user]") {
        Some(start) => {
            let end = lines[start + 1..]
                .iter()
                .position(|line| line.trim_start().starts_with('['))
                .map(|offset| start + 1 + offset)
                .unwrap_or(lines.len());
            lines.splice(start + 1..end, body);
        }
        None => {
            lines.push("[user]".to_string());
            lines.extend(body);
        }
    }

    let mut updated = lines.join("\n");
    updated.push('\n');
    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_existing_user_section_body() {
        let content = "[core]\n\tbare = false\n[user]\n\tname = Old Name\n\temail = old@example.com\n[remote \"origin\"]\n\turl = git@github.com:u/r.git\n";
        let updated = apply_user_section(content, "New Name", "new@example.com");
        assert_eq!(
            updated,
            "[core]\n\tbare = false\n[user]\n\tname = New Name\n\temail = new@example.com\n[remote \"origin\"]\n\turl = git@github.com:u/r.git\n"
        );
    }

    #[test]
    fn test_replaces_section_at_end_of_file() {
        let content = "[core]\n\tbare = false\n[user]\n\tname = Old\n";
        let updated = apply_user_section(content, "New", "new@example.com");
        assert_eq!(
            updated,
            "[core]\n\tbare = false\n[user]\n\tname = New\n\temail = new@example.com\n"
        );
    }

    #[test]
    fn test_drops_stale_keys_from_user_section() {
        let content = "[user]\n\tname = Old\n\temail = old@example.com\n\tsigningkey = ABC123\n";
        let updated = apply_user_section(content, "New", "new@example.com");
        assert!(!updated.contains("signingkey"));
    }

    #[test]
    fn test_appends_section_when_missing() {
        let content = "[core]\n\tbare = false\n";
        let updated = apply_user_section(content, "Name", "mail@example.com");
        assert_eq!(
            updated,
            "[core]\n\tbare = false\n[user]\n\tname = Name\n\temail = mail@example.com\n"
        );
    }

    #[test]
    fn test_appends_to_empty_config() {
        let updated = apply_user_section("", "Name", "mail@example.com");
        assert_eq!(updated, "[user]\n\tname = Name\n\temail = mail@example.com\n");
    }
}
