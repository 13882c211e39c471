use super::TreeBag;
use crate::{Container, Error, Result, SortedContainer};

impl<T: Ord> Container<T> for TreeBag<T> {
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
        Ok(std::mem::take(&mut self.counts).into_iter().collect())
    }
}

impl<T: Ord> SortedContainer<T> for TreeBag<T> {
    fn first(&self) -> Result<T>
    where
        T: Clone,
    {
        self.counts
            .keys()
            .next()
            .cloned()
            .ok_or(Error::Underflow)
    }

    fn last(&self) -> Result<T>
    where
        T: Clone,
    {
        self.counts
            .keys()
            .next_back()
            .cloned()
            .ok_or(Error::Underflow)
    }
}
