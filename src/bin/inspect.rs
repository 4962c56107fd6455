//! Print what is inside a `.jm` map: its dimensions, the zlib envelope
//! header and trailer, and whether the tile data verifies.

use jmendian::document::MapDocument;
use jmendian::zlib::Envelope;
use std::error;
use std::fs;

fn main() -> Result<(), Box<dyn error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <file.jm>", args[0]);
        std::process::exit(1);
    }

    let data = fs::read(&args[1])?;
    let doc = MapDocument::from_slice(&data)?;
    println!("width: {}", doc.width());
    println!("height: {}", doc.height());
    println!("dict: {}", doc.dict_len());

    let raw = doc.envelope()?;
    println!("envelope: {} bytes", raw.len());

    let envelope = Envelope::from_slice(&raw)?;
    println!("header: {}", envelope.header());
    println!("body: {} bytes", envelope.body().len());
    println!("checksum: 0x{:08x}", envelope.checksum());

    match envelope.inflate() {
        Ok(tiles) => {
            println!("data: {} bytes ({} tiles)", tiles.len(), tiles.len() / 2);
            if tiles.len() % 2 != 0 {
                println!("warning: tile data has an odd length");
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
