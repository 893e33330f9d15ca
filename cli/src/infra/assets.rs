//! Embedded package templates: implements the `TemplateAssets` port.
//!
//! At compile time, `include_dir!` embeds everything under `cli/templates/`:
//!   - `EVOLUTION_LOG.md`    : empty evolution log with the entry format
//!   - `memory/*.md`         : context, decisions, vocabulary and history stubs
//!   - `skills/evo/SKILL.md` : the self-evolution skill

use include_dir::{Dir, DirEntry, include_dir};

use crate::application::ports::{TemplateAssets, TemplateFile};

static TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Templates compiled into the binary.
pub struct EmbeddedTemplates;

impl TemplateAssets for EmbeddedTemplates {
    fn directories(&self) -> Vec<&'static str> {
        TEMPLATES
            .dirs()
            .filter_map(|d| d.path().to_str())
            .collect()
    }

    fn files(&self) -> Vec<TemplateFile> {
        let mut out = Vec::new();
        collect_files(&TEMPLATES, &mut out);
        out
    }
}

fn collect_files(dir: &'static Dir<'static>, out: &mut Vec<TemplateFile>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(sub) => collect_files(sub, out),
            DirEntry::File(file) => {
                if let Some(path) = file.path().to_str() {
                    out.push(TemplateFile {
                        path,
                        contents: file.contents(),
                    });
                }
            }
        }
    }
}
