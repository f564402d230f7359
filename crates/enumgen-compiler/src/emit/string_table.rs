//! String table builder.
//!
//! Concatenates display names into one blob and records the byte offset of
//! every boundary, so name `k` is `blob[offsets[k]..offsets[k + 1]]`.

use std::fmt;

/// Narrowest unsigned Go integer type that holds every offset of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum IndexWidth {
    U8,
    U16,
    U32,
    U64,
}

impl IndexWidth {
    pub fn for_max_offset(max: usize) -> Self {
        if max <= u8::MAX as usize {
            IndexWidth::U8
        } else if max <= u16::MAX as usize {
            IndexWidth::U16
        } else if max as u64 <= u32::MAX as u64 {
            IndexWidth::U32
        } else {
            IndexWidth::U64
        }
    }

    pub fn go_type(self) -> &'static str {
        match self {
            IndexWidth::U8 => "uint8",
            IndexWidth::U16 => "uint16",
            IndexWidth::U32 => "uint32",
            IndexWidth::U64 => "uint64",
        }
    }
}

impl fmt::Display for IndexWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.go_type())
    }
}

/// Collects names in order and produces a [`StringTable`].
#[derive(Debug, Default)]
pub struct StringTableBuilder {
    blob: String,
    offsets: Vec<usize>,
}

impl StringTableBuilder {
    pub fn new() -> Self {
        Self {
            blob: String::new(),
            offsets: vec![0],
        }
    }

    /// Append a name. Returns its index in the table.
    pub fn push(&mut self, name: &str) -> usize {
        let index = self.offsets.len() - 1;
        self.blob.push_str(name);
        self.offsets.push(self.blob.len());
        index
    }

    /// Number of names pushed so far.
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn finish(self) -> StringTable {
        StringTable {
            concatenated: self.blob,
            offsets: self.offsets,
        }
    }
}

/// Concatenated names plus `len + 1` byte offsets (`offsets[0] == 0`).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StringTable {
    concatenated: String,
    offsets: Vec<usize>,
}

impl StringTable {
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut builder = StringTableBuilder::new();
        for name in names {
            builder.push(name);
        }
        builder.finish()
    }

    pub fn concatenated(&self) -> &str {
        &self.concatenated
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte range of name `k`.
    pub fn span(&self, k: usize) -> Option<(usize, usize)> {
        let start = *self.offsets.get(k)?;
        let end = *self.offsets.get(k + 1)?;
        Some((start, end))
    }

    /// Name `k`.
    pub fn get(&self, k: usize) -> Option<&str> {
        let (start, end) = self.span(k)?;
        self.concatenated.get(start..end)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.offsets
            .windows(2)
            .map(|w| &self.concatenated[w[0]..w[1]])
    }

    /// Width of the generated index array.
    pub fn index_width(&self) -> IndexWidth {
        IndexWidth::for_max_offset(self.concatenated.len())
    }
}
