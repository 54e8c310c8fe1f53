use crate::error::ReportError;
use crate::source::RemoteSource;
use crate::source::Source;
use log::debug;
use log::info;
use reqwest::blocking::Client;
use reqwest::blocking::RequestBuilder;
use std::fs::File;
use std::io::BufReader;
use std::io::Cursor;
use std::io::Read;
use std::io::Seek;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnifiedReaderError {
    #[error("No data from remote file: '{0}'")]
    RemoteFileNoDataError(String),
}

/// A unified reader that can handle both local files and remote URLs
pub(crate) enum UnifiedReader {
    /// Local file reader
    Local(BufReader<File>),
    /// Remote URL reader (in-memory buffer)
    Remote(Cursor<Vec<u8>>),
}

impl UnifiedReader {
    /// Opens a workbook from either a local path or a remote URL.
    ///
    /// Remote bodies are downloaded in full before parsing starts, the zip
    /// reader needs to seek.
    pub(crate) fn new(source: &Source) -> Result<UnifiedReader, ReportError> {
        match source {
            Source::Local(path) => {
                debug!("Opening local workbook {}", path.display());
                let file = File::open(path)?;
                Ok(UnifiedReader::Local(BufReader::new(file)))
            }
            Source::Remote(remote) => Self::download(remote),
        }
    }

    fn download(remote: &RemoteSource) -> Result<UnifiedReader, ReportError> {
        let client = Client::builder().timeout(remote.timeout).build()?;
        let response = Self::request(&client, remote).send()?.error_for_status()?;
        let bytes = response.bytes()?.to_vec();
        if bytes.is_empty() {
            Err(UnifiedReaderError::RemoteFileNoDataError(remote.url.to_string()))?;
        }

        info!("Downloaded {} bytes from {}", bytes.len(), remote.url);
        Ok(UnifiedReader::Remote(Cursor::new(bytes)))
    }

    /// Builds the GET request, with Basic auth only when credentials are present
    pub(crate) fn request(client: &Client, remote: &RemoteSource) -> RequestBuilder {
        let request = client.get(remote.url.clone());
        match &remote.credentials {
            Some(credentials) => request.basic_auth(&credentials.username, Some(&credentials.password)),
            None => request,
        }
    }
}

impl Read for UnifiedReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            UnifiedReader::Local(reader) => reader.read(buf),
            UnifiedReader::Remote(reader) => reader.read(buf),
        }
    }
}

impl Seek for UnifiedReader {
    fn seek(&mut self, pos: std::io::SeekFrom) -> std::io::Result<u64> {
        match self {
            UnifiedReader::Local(reader) => reader.seek(pos),
            UnifiedReader::Remote(reader) => reader.seek(pos),
        }
    }
}
