use std::collections::BTreeSet;
use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::models::{Action, FontFile, NameLookup, QuarantineReason};
use crate::utils::{clean_name, unique_file_name};

use super::scan::DirectorySnapshot;

/// A font whose resolved name is known, tracked through the simulated listing
struct Renamable {
    font: FontFile,
    stem: OsString,
    position: OsString,
}

impl Renamable {
    fn extension(&self) -> &'static OsStr {
        OsStr::new(self.font.format.extension())
    }
}

/// Move every renamable font to its first free name, repeating until no font moves.
///
/// A font only ever moves to an earlier name in its own `name`, `name_1`, ...
/// sequence once it is on it, so this terminates. At the fixpoint no font has
/// a free earlier name, which is exactly the state a later run plans as no-ops.
fn settle_names(renamables: &mut [Renamable], entries: &mut BTreeSet<OsString>) {
    loop {
        let mut order: Vec<usize> = (0..renamables.len()).collect();
        order.sort_by(|&a, &b| renamables[a].position.cmp(&renamables[b].position));

        let mut moved = false;
        for idx in order {
            let item = &mut renamables[idx];
            let current = item.position.as_os_str();
            let target = unique_file_name(&item.stem, item.extension(), |candidate| {
                candidate != current && entries.contains(candidate)
            });

            if target != item.position {
                entries.remove(&item.position);
                entries.insert(target.clone());
                item.position = target;
                moved = true;
            }
        }

        if !moved {
            break;
        }
    }
}

/// Emit renames so that each target is vacated before it is claimed.
/// Cycles are broken by first staging one file under a free name.
fn order_renames(
    root: &Path,
    mut pending: Vec<(OsString, OsString, &Renamable)>,
    entries: &BTreeSet<OsString>,
) -> Vec<Action> {
    let mut actions = Vec::new();

    while !pending.is_empty() {
        let ready = pending
            .iter()
            .position(|(_, target, _)| !pending.iter().any(|(source, _, _)| source == target));

        match ready {
            Some(idx) => {
                let (source, target, _) = pending.remove(idx);
                actions.push(Action::Rename {
                    source: root.join(source),
                    target: root.join(target),
                });
            }
            None => {
                let (source, _, item) = &pending[0];
                let is_taken = |candidate: &OsStr| {
                    entries.contains(candidate)
                        || pending.iter().any(|(held, _, _)| held.as_os_str() == candidate)
                };
                let staged = unique_file_name(item.font.file_stem(), item.extension(), is_taken);
                actions.push(Action::Stage {
                    source: root.join(source),
                    target: root.join(&staged),
                });
                pending[0].0 = staged;
            }
        }
    }

    actions
}

fn plan_quarantine(
    failed_dir: &Path,
    font: &FontFile,
    reason: QuarantineReason,
    quarantined: &mut BTreeSet<OsString>,
) -> Action {
    let extension = OsStr::new(font.format.extension());
    let target = unique_file_name(font.file_stem(), extension, |candidate| {
        quarantined.contains(candidate)
    });

    quarantined.insert(target.clone());

    Action::Quarantine {
        source: font.path.clone(),
        target: failed_dir.join(target),
        reason,
    }
}

/// Turn name lookups into actions without touching the filesystem.
///
/// Quarantines and files that keep their name come first, in the order given.
/// Renames follow in an order where every target is already free. Two fonts
/// resolving to the same name end up as `Name.ext` and `Name_1.ext`, and a
/// name held by a font that is itself being renamed counts as free.
pub fn plan_actions<I>(snapshot: &DirectorySnapshot, lookups: I) -> Vec<Action>
where
    I: IntoIterator<Item = (FontFile, NameLookup)>,
{
    let failed_dir = snapshot.failed_dir();
    let mut entries = snapshot.entries.clone();
    let mut quarantined = snapshot.quarantined.clone();
    let mut actions = Vec::new();
    let mut renamables = Vec::new();

    for (font, lookup) in lookups {
        let reason = match lookup {
            NameLookup::Found(name) => {
                renamables.push(Renamable {
                    stem: OsString::from(clean_name(&name)),
                    position: font.file_name().to_os_string(),
                    font,
                });
                continue;
            }
            NameLookup::NotFound => QuarantineReason::NameNotFound,
            NameLookup::ParseError(detail) => QuarantineReason::Unparsable(detail),
        };

        entries.remove(font.file_name());
        actions.push(plan_quarantine(&failed_dir, &font, reason, &mut quarantined));
    }

    settle_names(&mut renamables, &mut entries);

    let mut pending = Vec::new();
    for item in &renamables {
        if item.position.as_os_str() == item.font.file_name() {
            actions.push(Action::Unchanged {
                path: item.font.path.clone(),
            });
        } else {
            let source = item.font.file_name().to_os_string();
            pending.push((source, item.position.clone(), item));
        }
    }

    actions.extend(order_renames(&snapshot.root, pending, &entries));
    actions
}
