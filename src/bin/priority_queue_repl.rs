//! Interactive driver for [`PriorityQueue`], for manual testing.
//!
//! Inserted integers are reused as both payload and priority.

use std::io::{self, Write};

use rust_basic_heaps::repl::{Command, CommandStream};
use rust_basic_heaps::PriorityQueue;

const HELP: &str = "\
Commands:
'+ <n>': Add value to priority queue (value doubles as priority)
'd': Delete highest-priority value
'p': Print priority queue
's': Get size of priority queue
'?': Show this message";

fn main() -> io::Result<()> {
    env_logger::init();

    let mut queue: PriorityQueue<i64, i64> = PriorityQueue::new();
    let stdin = io::stdin();
    let mut commands = CommandStream::new(stdin.lock());
    let mut out = io::stdout();

    write!(out, "> ")?;
    out.flush()?;
    while let Some(command) = commands.next_command()? {
        match command {
            Command::Insert(value) => match queue.insert(value, value) {
                Ok(()) => writeln!(out, "Inserted {value} into the priority queue")?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Command::Delete => match queue.delete_max() {
                Ok(value) => writeln!(out, "Deleted {value} from the priority queue")?,
                Err(_) => writeln!(out, "Priority queue is empty!")?,
            },
            Command::Print => writeln!(out, "{queue}")?,
            Command::Size => writeln!(out, "Priority queue size: {}", queue.len())?,
            Command::Help => writeln!(out, "{HELP}")?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}
