//! Plain-text rendering of directory trees.

use crate::error::Result;
use crate::storage::EntryId;
use crate::tree::{FileSystem, PATH_SEPARATOR};

const INDENT: &str = "  ";

/// Renders the subtree under `root` as indented lines.
///
/// Each level is indented by two spaces and directory names carry a
/// trailing separator. Children appear in insertion order.
pub fn render_tree(fs: &FileSystem, root: EntryId) -> Result<String> {
    fs.node(root)?;

    let mut out = String::new();
    let mut stack: Vec<(EntryId, usize)> = vec![(root, 0)];
    while let Some((id, depth)) = stack.pop() {
        let Ok(node) = fs.node(id) else {
            continue;
        };
        for _ in 0..depth {
            out.push_str(INDENT);
        }
        out.push_str(node.name());
        if node.is_dir() {
            out.push(PATH_SEPARATOR);
        }
        out.push('\n');
        stack.extend(node.children().iter().rev().map(|&child| (child, depth + 1)));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::User;

    #[test]
    fn renders_nested_tree_in_insertion_order() {
        let user = User::new("alice");
        let mut fs = FileSystem::new();
        let root = fs.create_directory("root", &user).unwrap();
        fs.create_file_in(root, "notes.txt", &user, None).unwrap();
        let docs = fs.create_directory_in(root, "docs", &user).unwrap();
        fs.create_file_in(docs, "plan.txt", &user, None).unwrap();
        fs.create_directory_in(docs, "archive", &user).unwrap();

        assert_eq!(
            render_tree(&fs, root).unwrap(),
            "root/\n  notes.txt\n  docs/\n    plan.txt\n    archive/\n"
        );
    }

    #[test]
    fn renders_single_file() {
        let mut fs = FileSystem::new();
        let file = fs.create_file("a.txt", &User::new("alice"), 0, None).unwrap();
        assert_eq!(render_tree(&fs, file).unwrap(), "a.txt\n");
    }
}
