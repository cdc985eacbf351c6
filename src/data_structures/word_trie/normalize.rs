// Copyright (c) 2025 Wordtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Input normalization shared by every trie operation.

use std::borrow::Cow;

/// Reduces `input` to its lowercase ASCII letters.
///
/// Every other character (digits, punctuation, whitespace, non-ASCII) is
/// dropped without inserting a separator, so `"Hello, World!123"` becomes
/// `"helloworld"`. Input that is already normalized is returned borrowed.
pub fn normalize(input: &str) -> Cow<'_, str> {
    if is_normalized(input) {
        return Cow::Borrowed(input);
    }

    Cow::Owned(
        input
            .bytes()
            .filter(u8::is_ascii_alphabetic)
            .map(|b| char::from(b.to_ascii_lowercase()))
            .collect(),
    )
}

/// Returns `true` if `input` consists only of lowercase ASCII letters.
pub(crate) fn is_normalized(input: &str) -> bool {
    input.bytes().all(|b| b.is_ascii_lowercase())
}
