//! Log command - show the rename log

use crate::session::Session;

/// Execute the log command, newest entries first
pub fn execute(session: &Session, limit: Option<usize>) {
    let entries = session.log().entries();

    if entries.is_empty() {
        if !session.quiet {
            println!("No renames logged yet.");
        }
        return;
    }

    let shown = limit.unwrap_or(entries.len()).min(entries.len());
    for entry in &entries[..shown] {
        println!("{entry}");
    }
    if !session.quiet && shown < entries.len() {
        println!("... {} older entr(ies) not shown", entries.len() - shown);
    }
}
