use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use insiderwatch::domain::RawTable;
use insiderwatch::error::FetchError;
use insiderwatch::port::DisclosureSource;

/// One scripted answer from the source.
pub enum Fetch {
    Table(RawTable),
    Fail(u16),
    Panic,
}

/// Source that replays a script of tables and failures, then repeats the
/// last table forever.
#[derive(Clone)]
pub struct ScriptedSource {
    script: Arc<Mutex<VecDeque<Fetch>>>,
    last: Arc<Mutex<Option<RawTable>>>,
    fetches: Arc<Mutex<usize>>,
}

impl ScriptedSource {
    pub fn new(script: Vec<Fetch>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into())),
            last: Arc::new(Mutex::new(None)),
            fetches: Arc::new(Mutex::new(0)),
        }
    }

    /// Source that always returns the same table.
    pub fn fixed(table: RawTable) -> Self {
        Self::new(vec![Fetch::Table(table)])
    }

    pub fn fetches(&self) -> usize {
        *self.fetches.lock()
    }
}

#[async_trait]
impl DisclosureSource for ScriptedSource {
    async fn fetch_table(&self) -> Result<RawTable, FetchError> {
        *self.fetches.lock() += 1;
        let next = self.script.lock().pop_front();
        match next {
            Some(Fetch::Table(table)) => {
                *self.last.lock() = Some(table.clone());
                Ok(table)
            }
            Some(Fetch::Fail(status)) => Err(FetchError::Status { status }),
            Some(Fetch::Panic) => panic!("source exploded"),
            None => self.last.lock().clone().ok_or(FetchError::EmptyTable),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
