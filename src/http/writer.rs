use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::response::{Body, Response};

const HTTP_VERSION: &str = "HTTP/1.0";

/// Size of each read when streaming a file body.
pub const CHUNK_SIZE: usize = 1024;

/// Status line, content-type line (empty if none) and the blank line that
/// ends the head.
pub fn serialize_head(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    if let Some(content_type) = &resp.content_type {
        buf.extend_from_slice(b"Content-type: ");
        buf.extend_from_slice(content_type.as_bytes());
    }
    buf.extend_from_slice(b"\r\n");

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Writes `resp` to `stream`, returning the number of body bytes sent.
///
/// Once the head is out, a failing body cannot change the status; the error
/// is returned and the caller drops the connection.
pub async fn write_response<W>(stream: &mut W, resp: Response) -> anyhow::Result<u64>
where
    W: AsyncWrite + Unpin,
{
    stream.write_all(&serialize_head(&resp)).await?;

    let sent = match resp.body {
        Body::Empty => 0,
        Body::Bytes(bytes) => {
            stream.write_all(&bytes).await?;
            bytes.len() as u64
        }
        Body::File(mut file) => {
            let mut chunk = BytesMut::with_capacity(CHUNK_SIZE);
            let mut sent = 0u64;

            loop {
                chunk.clear();
                let n = (&mut file).take(CHUNK_SIZE as u64).read_buf(&mut chunk).await?;
                if n == 0 {
                    break;
                }

                stream.write_all(&chunk).await?;
                sent += n as u64;
            }

            sent
        }
    };

    stream.flush().await?;
    Ok(sent)
}
