//! Interactive driver for [`BinaryHeap`], for manual testing.

use std::io::{self, Write};

use rust_basic_heaps::repl::{Command, CommandStream};
use rust_basic_heaps::BinaryHeap;

const HELP: &str = "\
Commands:
'+ <n>': Add value to heap
'd': Delete largest value in heap
'p': Print heap
's': Get size of heap
'?': Show this message";

fn main() -> io::Result<()> {
    env_logger::init();

    let mut heap: BinaryHeap<i64> = BinaryHeap::new();
    let stdin = io::stdin();
    let mut commands = CommandStream::new(stdin.lock());
    let mut out = io::stdout();

    write!(out, "> ")?;
    out.flush()?;
    while let Some(command) = commands.next_command()? {
        match command {
            Command::Insert(value) => match heap.insert(value) {
                Ok(()) => writeln!(out, "Inserted {value} into the heap")?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Command::Delete => match heap.delete_max() {
                Ok(value) => writeln!(out, "Deleted {value} from the heap")?,
                Err(_) => writeln!(out, "Heap is empty!")?,
            },
            Command::Print => writeln!(out, "{heap}")?,
            Command::Size => writeln!(out, "Heap size: {}", heap.len())?,
            Command::Help => writeln!(out, "{HELP}")?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}
