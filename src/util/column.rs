//! Spreadsheet-style column labels: `A ... Z, AA ... ZZ`.

/// Highest index with a distinct label (`ZZ`).
pub const MAX_COLUMN_INDEX: usize = 26 + 26 * 26;

/// Label for a 1-based column index.
///
/// Indices above [`MAX_COLUMN_INDEX`] map to `ZZ`; `0` maps to `A`.
pub fn column_label(idx: usize) -> String {
    let idx = idx.clamp(1, MAX_COLUMN_INDEX);
    if idx <= 26 {
        return letter(idx - 1).to_string();
    }
    let zero_based = idx - 1;
    let mut out = String::with_capacity(2);
    out.push(letter(zero_based / 26 - 1));
    out.push(letter(zero_based % 26));
    out
}

fn letter(offset: usize) -> char {
    char::from(b'A' + offset as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letters() {
        assert_eq!(column_label(1), "A");
        assert_eq!(column_label(2), "B");
        assert_eq!(column_label(26), "Z");
    }

    #[test]
    fn double_letters() {
        assert_eq!(column_label(27), "AA");
        assert_eq!(column_label(52), "AZ");
        assert_eq!(column_label(53), "BA");
        assert_eq!(column_label(702), "ZZ");
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(column_label(703), "ZZ");
        assert_eq!(column_label(0), "A");
    }
}
