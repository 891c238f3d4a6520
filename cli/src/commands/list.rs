use roster_common::config::Config;
use roster_core::{Registry, SnapshotStore};

use crate::commands::ListKind;
use crate::terminal::format::Describe;
use crate::terminal::print;

pub fn list<S: SnapshotStore>(registry: &Registry<S>, kind: ListKind, cfg: &Config) {
    match kind {
        ListKind::Students => print_records("students", &registry.list_students(), cfg),
        ListKind::Teachers => print_records("teachers", &registry.list_teachers(), cfg),
        ListKind::Courses => print_records("courses", &registry.list_courses(), cfg),
    }
}

fn print_records<T: Describe>(what: &str, records: &[T], cfg: &Config) {
    print::header(what, cfg.quiet);

    if records.is_empty() {
        print::no_results(what);
        return;
    }

    for (idx, record) in records.iter().enumerate() {
        print::record(idx, record);
    }

    if cfg.quiet == 0 {
        print::fat_separator();
        print::centerln(&format!("{} {what} listed", records.len()));
    }
}
