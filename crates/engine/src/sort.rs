use std::cmp::Ordering;
use std::collections::HashMap;

/// Project a computed result mapping onto a canonical reference order.
///
/// Returns the (id, value) pairs for exactly the result ids the reference
/// knows, in the reference's order. Result ids absent from the reference are
/// dropped; callers treat those as stale data. The result mapping is consumed,
/// the reference is not.
pub fn sort_by_reference<V>(
    order: impl IntoIterator<Item = u32>,
    mut values: HashMap<u32, V>,
) -> Vec<(u32, V)> {
    let mut sorted = Vec::with_capacity(values.len());
    for id in order {
        if let Some(value) = values.remove(&id) {
            sorted.push((id, value));
        }
    }
    sorted
}

/// Case-insensitive, digit-run-aware label comparison: "2 cm" sorts before
/// "10 cm". Digit runs compare numerically, everything else compares as
/// ASCII-lowercased characters.
pub fn natural_label_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();
    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(lc), Some(rc)) => {
                if lc.is_ascii_digit() && rc.is_ascii_digit() {
                    let ln = take_number(&mut left);
                    let rn = take_number(&mut right);
                    match ln.cmp(&rn) {
                        Ordering::Equal => {}
                        other => return other,
                    }
                } else {
                    match lc.to_ascii_lowercase().cmp(&rc.to_ascii_lowercase()) {
                        Ordering::Equal => {
                            left.next();
                            right.next();
                        }
                        other => return other,
                    }
                }
            }
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> u128 {
    let mut number: u128 = 0;
    while let Some(c) = chars.peek() {
        let Some(digit) = c.to_digit(10) else { break };
        number = number.saturating_mul(10).saturating_add(u128::from(digit));
        chars.next();
    }
    number
}
