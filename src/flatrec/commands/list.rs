use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// All records in append order, with every recognized field present.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut records = store.load()?;
    for record in &mut records {
        record.fill_defaults();
    }
    Ok(CmdResult::default().with_listed_records(records))
}
