use super::HashBag;
use crate::{Container, Error, Result};
use std::hash::Hash;

impl<T: Hash + Eq> Container<T> for HashBag<T> {
    fn len(&self) -> usize {
        self.total
    }

    fn unique_len(&self) -> usize {
        self.counts.len()
    }

    fn count_of(&self, value: &T) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    fn add(&mut self, value: T, copies: usize) -> Result<bool> {
        if copies == 0 {
            return Ok(false);
        }
        // A count never exceeds the total: checking the total is enough.
        self.total = self.total.checked_add(copies).ok_or_else(|| {
            Error::invalid(format!(
                "adding {} copies overflows the bag size {}",
                copies, self.total
            ))
        })?;
        let count = self.counts.entry(value).or_insert(0);
        *count += copies;
        Ok(*count == copies)
    }

    fn remove(&mut self, value: &T, copies: usize) -> Result<bool> {
        let count = match self.counts.get_mut(value) {
            None => return Ok(false),
            Some(count) => count,
        };
        if copies == 0 {
            return Ok(false);
        }
        if *count <= copies {
            self.total -= *count;
            self.counts.remove(value);
        } else {
            *count -= copies;
            self.total -= copies;
        }
        Ok(true)
    }

    fn for_each(&self, f: &mut dyn FnMut(&T, usize)) {
        for (value, count) in self.counts.iter() {
            f(value, *count)
        }
    }

    fn flush(&mut self) -> Result<Vec<(T, usize)>> {
        self.total = 0;
        Ok(self.counts.drain().collect())
    }
}
