//! Little-endian byte cursor over a borrowed `&[u8]`.
//!
//! Every read is bounds-checked and returns `None` past the end, so callers
//! choose which error a short buffer maps to.

pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn skip(&mut self, n: usize) -> Option<()> {
        let new_pos = self.pos.checked_add(n)?;
        if new_pos > self.data.len() {
            return None;
        }
        self.pos = new_pos;
        Some(())
    }

    pub(crate) fn read_u8(&mut self) -> Option<u8> {
        let b = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(b)
    }

    pub(crate) fn read_u16_le(&mut self) -> Option<u16> {
        let bytes = self.read_fixed_bytes::<2>()?;
        Some(u16::from_le_bytes(bytes))
    }

    pub(crate) fn read_u32_le(&mut self) -> Option<u32> {
        let bytes = self.read_fixed_bytes::<4>()?;
        Some(u32::from_le_bytes(bytes))
    }

    pub(crate) fn read_i32_le(&mut self) -> Option<i32> {
        let bytes = self.read_fixed_bytes::<4>()?;
        Some(i32::from_le_bytes(bytes))
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Option<[u8; N]> {
        let end = self.pos.checked_add(N)?;
        let bytes: [u8; N] = self.data.get(self.pos..end)?.try_into().ok()?;
        self.pos = end;
        Some(bytes)
    }
}
