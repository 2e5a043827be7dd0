use std::collections::HashMap;

use log::debug;
use serde::Serialize;

use crate::error::OsError;
use crate::path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    File,
    Server,
}

impl NodeKind {
    pub fn is_folder(&self) -> bool {
        matches!(self, NodeKind::Folder)
    }

    /// Short tag used by `ls` listings and the file explorer payload.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Folder => "dir",
            NodeKind::File => "file",
            NodeKind::Server => "server",
        }
    }
}

/// Index into the node arena. Ids stay valid for the whole session since
/// nodes are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsNode {
    pub name: String,
    pub kind: NodeKind,
    // only ever populated for folders
    children: Vec<NodeId>,
}

/// The virtual filesystem: an arena of named nodes plus a separate
/// path-keyed content table.
///
/// The two structures are deliberately independent - a file node with no
/// table entry reads back as a placeholder, and the table may carry
/// entries nothing in the tree points at. Structural mutations validate
/// everything up front, so a failed create leaves both halves exactly as
/// they were.
#[derive(Debug, Clone, PartialEq)]
pub struct Vfs {
    nodes: Vec<FsNode>,
    root: NodeId,
    content: HashMap<String, String>,
}

impl Vfs {
    /// A filesystem holding nothing but the root folder.
    pub fn empty() -> Self {
        Self {
            nodes: vec![FsNode {
                name: "/".to_string(),
                kind: NodeKind::Folder,
                children: Vec::new(),
            }],
            root: NodeId(0),
            content: HashMap::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &FsNode {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &FsNode> + '_ {
        self.nodes[id.0].children.iter().map(move |c| &self.nodes[c.0])
    }

    /// Walk a root-relative path (leading slash tolerated) segment by
    /// segment. Fails as soon as a segment is missing or a non-terminal
    /// segment is not a folder; the empty path is the root itself.
    pub fn find_node(&self, rel_path: &str) -> Option<NodeId> {
        let mut current = self.root;
        for part in rel_path.trim_start_matches('/').split('/').filter(|p| !p.is_empty()) {
            if !self.node(current).kind.is_folder() {
                return None;
            }
            current = self.child_by_name(current, part)?;
        }
        Some(current)
    }

    fn child_by_name(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.nodes[parent.0]
            .children
            .iter()
            .copied()
            .find(|id| self.nodes[id.0].name == name)
    }

    /// Content lookup never consults the tree and never fails; a missing
    /// entry reads back as a placeholder line.
    pub fn get_file_content(&self, rel_path: &str) -> String {
        self.content
            .get(rel_path)
            .cloned()
            .unwrap_or_else(|| format!("// File not found: {}", rel_path))
    }

    /// Wholesale upsert - no merge or patch semantics.
    pub fn update_file_content(&mut self, rel_path: &str, content: &str) {
        self.content.insert(rel_path.to_string(), content.to_string());
    }

    pub fn create_file(&mut self, parent_path: &str, name: &str) -> Result<NodeId, OsError> {
        let id = self.insert_child(parent_path, name, NodeKind::File)?;
        self.content.insert(path::join_rel(parent_path, name), String::new());
        debug!("created file {:?} under {:?}", name, parent_path);
        Ok(id)
    }

    pub fn create_directory(&mut self, parent_path: &str, name: &str) -> Result<NodeId, OsError> {
        let id = self.insert_child(parent_path, name, NodeKind::Folder)?;
        debug!("created directory {:?} under {:?}", name, parent_path);
        Ok(id)
    }

    /// Shared attach path for all node kinds. Validation happens before
    /// any write, so the arena is untouched on failure.
    pub(crate) fn insert_child(
        &mut self,
        parent_path: &str,
        name: &str,
        kind: NodeKind,
    ) -> Result<NodeId, OsError> {
        let parent = self
            .find_node(parent_path)
            .filter(|id| self.node(*id).kind.is_folder())
            .ok_or_else(|| {
                OsError::DirectoryNotFound(if parent_path.is_empty() {
                    "/".to_string()
                } else {
                    parent_path.to_string()
                })
            })?;
        if self.child_by_name(parent, name).is_some() {
            return Err(match kind {
                NodeKind::Folder => OsError::DirectoryAlreadyExists(name.to_string()),
                _ => OsError::FileAlreadyExists(name.to_string()),
            });
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(FsNode {
            name: name.to_string(),
            kind,
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn create_then_find_returns_matching_node() {
        let mut vfs = seed::seeded();
        vfs.create_file("data/blueprints", "drone_specs.txt").unwrap();
        let id = vfs.find_node("data/blueprints/drone_specs.txt").unwrap();
        assert_eq!(vfs.node(id).name, "drone_specs.txt");
        assert_eq!(vfs.node(id).kind, NodeKind::File);

        vfs.create_directory("data", "exfil").unwrap();
        let id = vfs.find_node("data/exfil").unwrap();
        assert_eq!(vfs.node(id).kind, NodeKind::Folder);
    }

    #[test]
    fn new_file_starts_with_empty_content() {
        let mut vfs = seed::seeded();
        vfs.create_file("", "notes.txt").unwrap();
        assert_eq!(vfs.get_file_content("notes.txt"), "");
    }

    #[test]
    fn duplicate_sibling_name_fails_and_leaves_tree_untouched() {
        let mut vfs = seed::seeded();
        let before = vfs.clone();

        assert_eq!(
            vfs.create_directory("", "logs"),
            Err(OsError::DirectoryAlreadyExists("logs".to_string()))
        );
        // a file may not shadow an existing folder either
        assert_eq!(
            vfs.create_file("", "logs"),
            Err(OsError::FileAlreadyExists("logs".to_string()))
        );
        assert_eq!(vfs, before);
    }

    #[test]
    fn create_under_missing_or_non_folder_parent_fails() {
        let mut vfs = seed::seeded();
        assert_eq!(
            vfs.create_file("ghost", "x"),
            Err(OsError::DirectoryNotFound("ghost".to_string()))
        );
        // servers are leaves: they take no children
        assert_eq!(
            vfs.create_file("remote_nodes/corp-mainframe", "x"),
            Err(OsError::DirectoryNotFound(
                "remote_nodes/corp-mainframe".to_string()
            ))
        );
    }

    #[test]
    fn non_terminal_file_segment_fails_resolution() {
        let vfs = seed::seeded();
        assert!(vfs.find_node("README.md").is_some());
        assert!(vfs.find_node("README.md/nested").is_none());
        assert!(vfs.find_node("remote_nodes/corp-mainframe").is_some());
        assert!(vfs.find_node("remote_nodes/corp-mainframe/shell").is_none());
    }

    #[test]
    fn empty_path_and_slash_resolve_to_root() {
        let vfs = seed::seeded();
        assert_eq!(vfs.find_node(""), Some(vfs.root()));
        assert_eq!(vfs.find_node("/"), Some(vfs.root()));
        let names: Vec<&str> = vfs.children(vfs.root()).map(|n| n.name.as_str()).collect();
        assert!(names.contains(&"README.md"));
        assert!(names.contains(&"secure_vault"));
    }

    #[test]
    fn content_lookup_never_fails() {
        let vfs = seed::seeded();
        assert_eq!(
            vfs.get_file_content("no/such/file.txt"),
            "// File not found: no/such/file.txt"
        );
    }

    #[test]
    fn content_table_tolerates_entries_without_nodes() {
        let mut vfs = seed::seeded();
        vfs.update_file_content("phantom/cache.bin", "deadbeef");
        assert!(vfs.find_node("phantom/cache.bin").is_none());
        assert_eq!(vfs.get_file_content("phantom/cache.bin"), "deadbeef");
    }

    #[test]
    fn update_replaces_content_wholesale() {
        let mut vfs = seed::seeded();
        vfs.update_file_content("README.md", "rewritten");
        assert_eq!(vfs.get_file_content("README.md"), "rewritten");
    }
}
