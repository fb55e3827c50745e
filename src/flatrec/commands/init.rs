use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    store.reset()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized store at {}",
        store.location()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn empties_existing_store() {
        let mut store = StoreFixture::new().with_records(3).store;

        let result = run(&mut store).unwrap();

        assert!(store.load().unwrap().is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Initialized store at memory");
    }

    #[test]
    fn clears_corrupt_store() {
        let mut store = StoreFixture::new().with_raw_line("not a record").store;
        assert!(store.load().is_err());

        run(&mut store).unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
