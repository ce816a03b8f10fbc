//! Positional serde form of [`RelativeEncoding`]
//!
//! Serialized as one flat array. Even positions are values, odd positions
//! are deltas, so integer-valued trees stay unambiguous.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::{RelativeEncoding, Token};

impl<T: Serialize> Serialize for RelativeEncoding<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for token in self.tokens() {
            match token {
                Token::Value(value) => seq.serialize_element(value)?,
                Token::Delta(delta) => seq.serialize_element(delta)?,
            }
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for RelativeEncoding<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(EncodingVisitor(PhantomData))
    }
}

struct EncodingVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for EncodingVisitor<T> {
    type Value = RelativeEncoding<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a flat array alternating values and branch deltas")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        // Size hint is input-controlled
        let mut tokens = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));

        loop {
            let next = if tokens.len() % 2 == 0 {
                seq.next_element::<T>()?.map(Token::Value)
            } else {
                seq.next_element::<usize>()?.map(Token::Delta)
            };
            match next {
                Some(token) => tokens.push(token),
                None => break,
            }
        }

        if tokens.len() % 2 == 0 && !tokens.is_empty() {
            return Err(de::Error::invalid_length(tokens.len(), &self));
        }
        Ok(RelativeEncoding::from_tokens(tokens))
    }
}
