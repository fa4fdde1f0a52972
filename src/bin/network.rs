use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use std::io::{self, Read, Write};

/// Taille maximale d'un message, en émission comme en réception (1 Mio).
pub const MAX_MESSAGE_SIZE: u32 = 1 << 20;

/// Envoie un message : taille sur 4 octets (little endian) puis le texte UTF-8.
///
/// Un message plus grand que `MAX_MESSAGE_SIZE` est refusé (`InvalidInput`)
/// sans rien écrire.
pub fn send_message<W: Write>(stream: &mut W, message: &str) -> io::Result<()> {
    let message_bytes = message.as_bytes();
    let size = u32::try_from(message_bytes.len())
        .ok()
        .filter(|&size| size <= MAX_MESSAGE_SIZE)
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("message of {} bytes exceeds limit", message_bytes.len()),
            )
        })?;
    stream.write_u32::<LittleEndian>(size)?;
    stream.write_all(message_bytes)?;
    stream.flush()
}

/// Reçoit un message, ou `None` si le flux est fermé avant tout en-tête.
///
/// Une fermeture au milieu d'une trame reste une erreur `UnexpectedEof`.
pub fn try_receive_message<R: Read>(stream: &mut R) -> io::Result<Option<String>> {
    let mut header = [0u8; 4];
    let mut filled = 0;
    while filled < header.len() {
        match stream.read(&mut header[filled..]) {
            Ok(0) if filled == 0 => return Ok(None),
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "connection closed inside frame header",
                ))
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }

    let size = LittleEndian::read_u32(&header);
    if size > MAX_MESSAGE_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("message of {} bytes exceeds limit", size),
        ));
    }
    let mut buffer = vec![0; size as usize];
    stream.read_exact(&mut buffer)?;
    String::from_utf8(buffer)
        .map(Some)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid data: {}", e)))
}

/// Reçoit un message encadré par `send_message`.
pub fn receive_message<R: Read>(stream: &mut R) -> io::Result<String> {
    try_receive_message(stream)?.ok_or_else(|| {
        io::Error::new(io::ErrorKind::UnexpectedEof, "connection closed")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_frame_layout() {
        let mut out = Vec::new();
        send_message(&mut out, "\"Step\"").unwrap();
        assert_eq!(&out[..4], &[6, 0, 0, 0]);
        assert_eq!(&out[4..], b"\"Step\"");

        let mut input = Cursor::new(out);
        assert_eq!(receive_message(&mut input).unwrap(), "\"Step\"");
    }

    #[test]
    fn test_truncated_and_invalid_frames() {
        let mut truncated = Cursor::new(vec![10, 0, 0, 0, b'a']);
        let err = receive_message(&mut truncated).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

        let mut invalid = Cursor::new(vec![2, 0, 0, 0, 0xff, 0xfe]);
        let err = receive_message(&mut invalid).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let mut huge = Cursor::new(vec![0xff, 0xff, 0xff, 0xff]);
        let err = receive_message(&mut huge).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_largest_message_round_trips() {
        let message = "a".repeat(MAX_MESSAGE_SIZE as usize);
        let mut out = Vec::new();
        send_message(&mut out, &message).unwrap();
        let mut input = Cursor::new(out);
        assert_eq!(receive_message(&mut input).unwrap().len(), message.len());
    }

    #[test]
    fn test_oversized_message_is_not_sent() {
        let message = "a".repeat(MAX_MESSAGE_SIZE as usize + 1);
        let mut out = Vec::new();
        let err = send_message(&mut out, &message).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(out.is_empty());
    }

    #[test]
    fn test_closed_stream_versus_cut_frame() {
        let mut empty = Cursor::new(Vec::new());
        assert_eq!(try_receive_message(&mut empty).unwrap(), None);

        let mut cut_header = Cursor::new(vec![5, 0]);
        let err = try_receive_message(&mut cut_header).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

        let mut cut_body = Cursor::new(vec![5, 0, 0, 0, b'a', b'b']);
        let err = try_receive_message(&mut cut_body).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
