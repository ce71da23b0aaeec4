//! A scripted stand-in for the playback daemon, listening on localhost.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

/// `currentsong` answer for a file under the music directory.
pub(crate) const SONG: &str = "file: Artist/Album/01 Intro.flac\n\
Artist: Boards of Canada\n\
Title: Roygbiv\n\
Pos: 3\n\
Id: 17\n\
OK\n";

/// A one-shot daemon: greets, answers each request line with the next
/// scripted response, then records whatever else the client sends.
pub(crate) fn serve(responses: &'static [&'static str]) -> (u16, thread::JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut writer = stream;
        writer.write_all(b"OK MPD 0.23.5\n").unwrap();

        let mut seen = Vec::new();
        for response in responses {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap_or(0) == 0 {
                return seen;
            }
            seen.push(line.trim_end().to_string());
            if writer.write_all(response.as_bytes()).is_err() {
                return seen;
            }
        }
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) > 0 {
            seen.push(line.trim_end().to_string());
        }
        seen
    });
    (port, handle)
}

