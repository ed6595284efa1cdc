// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// The classic "simpletest" scenario: a person record with a dob field and
// an address sub-message, framed in an envelope with no taxonomy.

use fudge::types::{INT_TYPE_ID, MESSAGE_TYPE_ID, STRING_TYPE_ID};
use fudge::{Envelope, FieldType, Message};

const ADDRESS: [&str; 4] = ["123 Fake Street", "Some City", "P0S T4L", "Country"];

fn build_message() -> Message {
    let mut address = Message::new();
    for (ordinal, line) in ADDRESS.iter().enumerate() {
        address.add_ordinal(ordinal as i16, *line);
    }

    let mut message = Message::new();
    message.add_field(19801231i64, Some(4), Some("dob"), None);
    message.add_named("address", address);
    message
}

#[test]
fn encoded_length_is_header_plus_field_sizes() {
    let message = build_message();
    let field_sizes: usize = message
        .fields
        .iter()
        .map(|field| field.size(None).expect("field size"))
        .sum();

    let envelope = Envelope::new(message);
    let bytes = envelope.to_bytes(None).expect("encode should succeed");
    assert_eq!(bytes.len(), 8 + field_sizes);
    // dob: 2 header + 2 ordinal + 4 name + 4 payload; address: 2 header +
    // 8 name + 1 length + 58 sub-message
    assert_eq!(bytes.len(), 89);
}

#[test]
fn dob_narrows_to_a_32_bit_int() {
    let message = build_message();
    assert_eq!(message.fields[0].type_, FieldType::Int);
    assert!(message.fields[0].is_type(INT_TYPE_ID));
}

#[test]
fn decode_reproduces_the_field_tree() {
    let envelope = Envelope::new(build_message());
    let bytes = envelope.to_bytes(None).expect("encode should succeed");

    let decoded = Envelope::decode(&bytes, None).expect("decode should succeed");
    assert_eq!(decoded.directives, 0);
    assert_eq!(decoded.schema_version, 0);
    assert_eq!(decoded.taxonomy_id, 0);

    let message = &decoded.message;
    assert_eq!(message.len(), 2);

    let dob = &message.fields[0];
    assert_eq!(dob.name.as_deref(), Some("dob"));
    assert_eq!(dob.ordinal, Some(4));
    assert_eq!(dob.value.as_i64(), Some(19801231));

    let address = &message.fields[1];
    assert!(address.is_type(MESSAGE_TYPE_ID));
    assert_eq!(address.name.as_deref(), Some("address"));
    let address = address.value.as_message().expect("address sub-message");
    assert_eq!(address.len(), 4);
    for (index, field) in address.fields.iter().enumerate() {
        assert!(field.is_type(STRING_TYPE_ID));
        assert_eq!(field.ordinal, Some(index as i16));
        assert_eq!(field.value.as_str(), Some(ADDRESS[index]));
    }
}

#[test]
fn envelope_roundtrip_is_field_for_field_equal() {
    let envelope = Envelope::new(build_message());
    let bytes = envelope.to_bytes(None).expect("encode should succeed");
    let decoded = Envelope::decode(&bytes, None).expect("decode should succeed");
    assert_eq!(decoded, envelope);
}
