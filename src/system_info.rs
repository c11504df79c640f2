use git_version::git_version;

// include -modified if the working tree has uncommitted changes
const COMMIT: &str = git_version!(
    args = ["--abbrev=10", "--always", "--dirty=-modified"],
    fallback = "unknown"
);

pub fn get_system_info() -> String {
    let profile = if cfg!(debug_assertions) {
        "Dev"
    } else {
        "Release"
    };

    let version = match option_env!("RELEASE_VERSION") {
        Some(tag) if !tag.is_empty() => format!("release {}", tag),
        _ => match option_env!("LATEST_TAG") {
            Some(latest) if !latest.is_empty() => {
                format!("development build ahead of {}", latest)
            }
            _ => "development build".to_string(),
        },
    };

    format!(
        "{} - {}\nCommit: {}\n{} build",
        env!("CARGO_PKG_NAME"),
        version,
        COMMIT,
        profile
    )
}
