//! The fixed filesystem image every session starts from. In-memory only;
//! a reload puts it back exactly as written here.

use crate::path;
use crate::vfs::{NodeKind, Vfs};

struct SeedNode {
    name: &'static str,
    kind: NodeKind,
    children: &'static [SeedNode],
}

const TREE: &[SeedNode] = &[
    SeedNode {
        name: "bin",
        kind: NodeKind::Folder,
        children: &[
            SeedNode { name: "exploit.sh", kind: NodeKind::File, children: &[] },
            SeedNode { name: "nmap", kind: NodeKind::File, children: &[] },
            SeedNode { name: "metasploit", kind: NodeKind::File, children: &[] },
        ],
    },
    SeedNode {
        name: "data",
        kind: NodeKind::Folder,
        children: &[
            SeedNode { name: "passwords.db", kind: NodeKind::File, children: &[] },
            SeedNode { name: "intel_corp.zip", kind: NodeKind::File, children: &[] },
            SeedNode {
                name: "blueprints",
                kind: NodeKind::Folder,
                children: &[SeedNode {
                    name: "ctOS_v3.pdf",
                    kind: NodeKind::File,
                    children: &[],
                }],
            },
        ],
    },
    SeedNode {
        name: "logs",
        kind: NodeKind::Folder,
        children: &[
            SeedNode { name: "access.log", kind: NodeKind::File, children: &[] },
            SeedNode { name: "firewall.log", kind: NodeKind::File, children: &[] },
        ],
    },
    SeedNode {
        name: "remote_nodes",
        kind: NodeKind::Folder,
        children: &[
            SeedNode { name: "corp-mainframe", kind: NodeKind::Server, children: &[] },
            SeedNode { name: "secure-bank-db", kind: NodeKind::Server, children: &[] },
        ],
    },
    SeedNode { name: "README.md", kind: NodeKind::File, children: &[] },
    SeedNode { name: "secure_vault", kind: NodeKind::Folder, children: &[] },
];

const CONTENT: &[(&str, &str)] = &[
    (
        "bin/exploit.sh",
        r#"#!/bin/bash
# Simple network scanner
echo "Enter the IP range to scan (e.g., 192.168.1.0/24):"
read ip_range
echo "Scanning $ip_range..."
nmap -sn $ip_range
"#,
    ),
    ("bin/nmap", "// Binary file: content not displayed"),
    ("bin/metasploit", "// Binary file: content not displayed"),
    ("data/passwords.db", "// Encrypted database: cannot display content"),
    ("data/intel_corp.zip", "// Compressed archive: content not displayed"),
    ("data/blueprints/ctOS_v3.pdf", "// PDF document: content not displayed"),
    (
        "logs/access.log",
        r#"[2024-07-29 10:00:01] 192.168.1.1 GET /login
[2024-07-29 10:00:05] 10.0.0.5 POST /api/data
[2024-07-29 10:01:23] 203.0.113.88 GET /
[2024-07-29 10:02:00] ::1 ALERT - Unauthorized access attempt from 127.0.0.1
"#,
    ),
    (
        "logs/firewall.log",
        r#"[DENY] SRC=101.55.3.2 DST=192.168.1.101 PORT=22
[ALLOW] SRC=172.16.31.4 DST=192.168.1.100 PORT=443
[DENY] SRC=198.51.100.12 DST=192.168.1.254 PORT=8080
"#,
    ),
    (
        "README.md",
        r#"# Digital Shadow's Lair

This is my personal workspace. Tread carefully.

## Commands
- `edit <file>` - Open a file.
- `help` - For all available commands.
"#,
    ),
];

/// Build the seeded filesystem. Sibling names in [`TREE`] are unique by
/// construction, so the inserts cannot collide.
pub fn seeded() -> Vfs {
    let mut vfs = Vfs::empty();
    install(&mut vfs, "", TREE);
    for (rel_path, text) in CONTENT {
        vfs.update_file_content(rel_path, text);
    }
    vfs
}

fn install(vfs: &mut Vfs, parent: &str, nodes: &[SeedNode]) {
    for node in nodes {
        let _ = vfs.insert_child(parent, node.name, node.kind);
        if node.kind.is_folder() {
            let child_path = path::join_rel(parent, node.name);
            install(vfs, &child_path, node.children);
        }
    }
}
