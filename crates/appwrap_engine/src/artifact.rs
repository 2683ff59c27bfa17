/// Engine string embedded in the placeholder artifact.
pub const WEBVIEW_ENGINE: &str = "Chrome";

/// The "downloaded" file of the download variant. The `.apk` extension is
/// deliberately misleading: this is a plain-text demo artifact and will not
/// install anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactFile {
    pub file_name: String,
    pub contents: String,
}

/// Builds the placeholder artifact for a successful run.
pub fn build_artifact(app_name: &str, url: &str) -> ArtifactFile {
    let contents = format!(
        "App Name: {app_name}\n\
         Website URL: {url}\n\
         WebView Engine: {WEBVIEW_ENGINE}\n\
         \n\
         This is a placeholder configuration file.\n\
         In a real build process, this information would be used by a server to generate a functional APK.\n\
         This file is not an installable Android application and will cause a parsing error if you try to open it."
    );
    ArtifactFile {
        file_name: format!("{}.apk", sanitize_app_name(app_name)),
        contents,
    }
}

/// Lowercases the name and maps every character outside `[a-z0-9]` to `_`.
/// An empty name falls back to `"app"`.
pub fn sanitize_app_name(app_name: &str) -> String {
    if app_name.is_empty() {
        return "app".to_string();
    }
    app_name
        .chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{build_artifact, sanitize_app_name};

    #[test]
    fn sanitizes_names_for_the_file_system() {
        assert_eq!(sanitize_app_name("My App"), "my_app");
        assert_eq!(sanitize_app_name("Web2App!"), "web2app_");
        assert_eq!(sanitize_app_name("CAFÉ"), "caf_");
        assert_eq!(sanitize_app_name(""), "app");
    }

    #[test]
    fn artifact_lists_the_submitted_fields() {
        let artifact = build_artifact("My App", "https://example.com");

        assert_eq!(artifact.file_name, "my_app.apk");
        assert!(artifact.contents.contains("App Name: My App"));
        assert!(artifact.contents.contains("Website URL: https://example.com"));
        assert!(artifact.contents.contains("WebView Engine: Chrome"));
        assert!(artifact.contents.contains("not an installable Android application"));
    }
}
