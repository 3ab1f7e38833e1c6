// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{InputFormat, OutputFormat, OutputOptions, TextEncoding, UnknownFormatError};

#[test]
fn test_input_format_names() {
    for &format in InputFormat::ALL {
        assert_eq!(format.to_string().parse::<InputFormat>(), Ok(format));
    }
    assert_eq!("HEX".parse(), Ok(InputFormat::Hex));
    assert_eq!("TEXT".parse(), Ok(InputFormat::Text));
    assert_eq!("B64".parse(), Ok(InputFormat::B64));
    assert_eq!("BYTES".parse(), Ok(InputFormat::Bytes));
}

#[test]
fn test_output_format_names() {
    for &format in OutputFormat::ALL {
        assert_eq!(format.to_string().parse::<OutputFormat>(), Ok(format));
    }
    assert!("TEXT".parse::<OutputFormat>().is_err());
}

#[test]
fn test_text_encoding_names() {
    assert_eq!("UTF8".parse(), Ok(TextEncoding::Utf8));
    assert_eq!("UTF16BE".parse(), Ok(TextEncoding::Utf16Be));
    assert_eq!("UTF16LE".parse(), Ok(TextEncoding::Utf16Le));
    assert_eq!(TextEncoding::default(), TextEncoding::Utf8);
}

#[test]
fn test_names_are_case_sensitive() {
    assert_eq!(
        "hex".parse::<InputFormat>(),
        Err(UnknownFormatError {
            kind: "input format",
            name: "hex".into()
        })
    );
    assert!("utf8".parse::<TextEncoding>().is_err());
}

#[test]
fn test_unknown_format_message() {
    let err = "UTF-8".parse::<TextEncoding>().expect_err("UTF-8 is not a valid name");
    assert_eq!(err.to_string(), "unsupported text encoding: \"UTF-8\"");
}

#[test]
fn test_output_options_default_and_builders() {
    let defaults = OutputOptions::default();
    assert!(!defaults.output_upper);
    assert_eq!(defaults.b64_pad, "=");

    let custom = OutputOptions::default()
        .with_output_upper(true)
        .with_b64_pad("");
    assert!(custom.output_upper);
    assert!(custom.b64_pad.is_empty());
}
