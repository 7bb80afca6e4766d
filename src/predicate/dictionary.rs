/// Dictionary page consulted by [`super::PredicateColumn::append_dict`].
///
/// Entry `code` spans `lengths[code]` bytes of `data` starting at
/// `offsets[code]`. Nothing here is owned; the column keeps views into
/// `data` after the call returns.
#[derive(Debug, Clone, Copy)]
pub struct Dictionary<'a> {
    data: &'a [u8],
    offsets: &'a [u32],
    lengths: &'a [u32],
}

impl<'a> Dictionary<'a> {
    /// Describe a dictionary page.
    pub fn new(data: &'a [u8], offsets: &'a [u32], lengths: &'a [u32]) -> Self {
        debug_assert_eq!(
            offsets.len(),
            lengths.len(),
            "dictionary offsets and lengths must describe the same entries"
        );
        Self {
            data,
            offsets,
            lengths,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Bytes of entry `code`. Panics when `code` is out of range.
    #[inline]
    pub fn entry(&self, code: i32) -> &'a [u8] {
        debug_assert!(code >= 0, "negative dictionary code {code}");
        let code = code as usize;
        let start = self.offsets[code] as usize;
        &self.data[start..start + self.lengths[code] as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_entries() {
        let data = b"applebananacherry";
        let dict = Dictionary::new(data, &[0, 5, 11], &[5, 6, 6]);
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.entry(0), b"apple");
        assert_eq!(dict.entry(2), b"cherry");
    }

    #[test]
    #[should_panic]
    fn out_of_range_code_panics() {
        let dict = Dictionary::new(b"a", &[0], &[1]);
        dict.entry(1);
    }
}
