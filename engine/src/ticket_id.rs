use lotto_api::consts::TICKET_CODE_WIDTH;

/// 32-bit rolling string hash (`h * 31 + unit`, wrapping) over UTF-16 code
/// units, returned as an absolute value.
pub fn hash_string(input: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in input.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}

/// Render a value in upper-case base 36.
pub fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Shareable label for the `index`-th ticket of a batch, e.g. "LMX-00A1B2".
///
/// Deterministic per `(batch_id, index)`; not collision free.
pub fn derive_ticket_id(prefix: &str, batch_id: &str, index: usize) -> String {
    let code = to_base36(hash_string(&format!("{batch_id}:{index}")));
    format!("{prefix}-{code:0>width$}", width = TICKET_CODE_WIDTH)
}
