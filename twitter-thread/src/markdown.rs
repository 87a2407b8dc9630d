use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::entry::ThreadEntry;

#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// Append a period to paragraphs that do not end in punctuation
    pub ensure_periods: bool,
    /// Directory prefix of image links
    pub image_path: PathBuf,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            ensure_periods: false,
            image_path: PathBuf::from("./images"),
        }
    }
}

pub fn generate_markdown(entries: &[ThreadEntry], options: &MarkdownOptions) -> String {
    static PUNCTUATED_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r".+[.,!?…-]$").unwrap());

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.text);
        if options.ensure_periods && !PUNCTUATED_RE.is_match(&entry.text) {
            output.push('.');
        }
        output.push_str("\n\n");

        for image in &entry.images {
            output.push_str(&format!(
                "![{}]({})\n\n",
                image.alt_text.as_deref().unwrap_or_default(),
                image_link(&options.image_path, &image.filename),
            ));
        }

        for video in &entry.videos {
            output.push_str(&format!("!!! Video goes here: {} !!!\n\n", video));
        }
    }

    output.trim().to_owned()
}

/// Join like a path, dropping `.` and folding `..` into the preceding directory
fn image_link(image_path: &Path, filename: &str) -> String {
    let mut path = PathBuf::new();
    for component in image_path.join(filename).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match path.components().next_back() {
                Some(Component::Normal(_)) => {
                    path.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => path.push(component),
            },
            _ => path.push(component),
        }
    }
    path.display().to_string()
}
