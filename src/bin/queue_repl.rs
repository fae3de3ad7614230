//! Interactive driver for [`LinkedQueue`], for manual testing.

use std::io::{self, Write};

use rust_basic_heaps::repl::{Command, CommandStream};
use rust_basic_heaps::LinkedQueue;

const HELP: &str = "\
Commands:
'+ <n>': Add value to queue
'd': Delete first value in queue
'p': Print queue
's': Get size of queue
'?': Show this message";

fn main() -> io::Result<()> {
    env_logger::init();

    let mut queue: LinkedQueue<i64> = LinkedQueue::new();
    let stdin = io::stdin();
    let mut commands = CommandStream::new(stdin.lock());
    let mut out = io::stdout();

    write!(out, "> ")?;
    out.flush()?;
    while let Some(command) = commands.next_command()? {
        match command {
            Command::Insert(value) => {
                queue.enqueue(value);
                writeln!(out, "Inserted {value} into the queue")?;
            }
            Command::Delete => match queue.dequeue() {
                Ok(value) => writeln!(out, "Deleted {value} from the queue")?,
                Err(_) => writeln!(out, "Queue is empty!")?,
            },
            Command::Print => writeln!(out, "{queue}")?,
            Command::Size => writeln!(out, "Queue size: {}", queue.len())?,
            Command::Help => writeln!(out, "{HELP}")?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}
