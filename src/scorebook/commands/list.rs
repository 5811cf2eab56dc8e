use crate::error::Result;
use crate::model::ListedRecord;
use crate::store::DataStore;

/// Streams every record from the start of the store.
///
/// Records are read one at a time; the listing stops at end of data or at the
/// first line that cannot be decoded.
pub struct Listing<'a, S: DataStore> {
    store: &'a mut S,
    next_position: u32,
    done: bool,
}

impl<S: DataStore> Iterator for Listing<'_, S> {
    type Item = Result<ListedRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.store.read_next() {
            Ok(Some(record)) => {
                let listed = ListedRecord {
                    position: self.next_position,
                    record,
                };
                self.next_position += 1;
                Some(Ok(listed))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

pub fn run<S: DataStore>(store: &mut S) -> Result<Listing<'_, S>> {
    store.rewind()?;
    Ok(Listing {
        store,
        next_position: 1,
        done: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::store::memory::fixtures::store_with_records;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_nothing_for_empty_store() {
        let mut store = InMemoryStore::new();
        assert_eq!(run(&mut store).unwrap().count(), 0);
    }

    #[test]
    fn lists_in_insertion_order_with_positions() {
        let mut store = store_with_records(4);
        let listed: Vec<_> = run(&mut store)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(listed.len(), 4);
        for (i, item) in listed.iter().enumerate() {
            assert_eq!(item.position, i as u32 + 1);
            assert_eq!(item.record.id, format!("a{:08}", i + 1));
        }
    }

    #[test]
    fn restarts_from_the_top_every_run() {
        let mut store = store_with_records(2);
        assert_eq!(run(&mut store).unwrap().count(), 2);
        assert_eq!(run(&mut store).unwrap().count(), 2);
    }

    #[test]
    fn stops_at_first_corrupt_line() {
        let mut store = InMemoryStore::from_bytes(
            b"a00000001 55 \nnot a record!\na00000003 70 \n".to_vec(),
        );
        let listed: Vec<_> = run(&mut store)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(
            listed,
            vec![ListedRecord {
                position: 1,
                record: Record::new("a00000001", 55),
            }]
        );
    }
}
