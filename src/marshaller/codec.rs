use crate::{error::Error, marshaller::TextMarshaller, types::Entry};
use bytes::BytesMut;
use tokio_util::codec::Encoder;

/// An [`Encoder`] writing one marshalled line per entry, for use with
/// `tokio_util::codec::FramedWrite`.
#[derive(Clone, Debug, Default)]
pub struct EntryEncoder {
    marshaller: TextMarshaller,
}

impl EntryEncoder {
    pub fn new(marshaller: TextMarshaller) -> Self {
        EntryEncoder { marshaller }
    }

    pub fn marshaller(&self) -> &TextMarshaller {
        &self.marshaller
    }
}

impl Encoder<Entry> for EntryEncoder {
    type Error = Error;

    fn encode(&mut self, item: Entry, dst: &mut BytesMut) -> Result<(), Self::Error> {
        self.marshaller.marshal_into(&item, dst)
    }
}

impl<'a> Encoder<&'a Entry> for EntryEncoder {
    type Error = Error;

    fn encode(&mut self, item: &'a Entry, dst: &mut BytesMut) -> Result<(), Self::Error> {
        self.marshaller.marshal_into(item, dst)
    }
}
