use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::process::ExitCode;

use log::warn;

use eatshow::eat::{self, Database, Mode, Result, Session};

/// Marker file whose existence says this is not the first run from here.
const FIRST_RUN_MARKER: &str = "es.log";

fn main() -> ExitCode {
    env_logger::init();
    check_first_run();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut app = App::default();
    match app.run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// What a switch told the dispatcher to do next.
enum FlagAction {
    Continue,
    /// Help, about, or a batch file handled the rest of the invocation.
    Done,
}

#[derive(Default)]
struct App {
    session: Session,
    db: Option<Database>,
}

impl App {
    fn run(&mut self, args: &[String]) -> Result<()> {
        // With nothing but switches on the line we fall into the
        // interactive prompt once they have been applied.
        let interactive = args.iter().all(|arg| is_flag(arg));
        if let FlagAction::Done = self.dispatch(args, true)? {
            return Ok(());
        }
        if interactive {
            self.ensure_database()?;
            self.interactive()?;
        }
        // Closes the echo file, if one is open.
        self.session.reset();
        Ok(())
    }

    /// Process one token stream: switches take effect in place, anything
    /// else is a cue word. Runtime switches like -sw may appear between
    /// words.
    fn dispatch(&mut self, tokens: &[String], allow_batch: bool) -> Result<FlagAction> {
        for token in tokens {
            if is_flag(token) {
                if let FlagAction::Done = self.flag(token, allow_batch)? {
                    return Ok(FlagAction::Done);
                }
            } else {
                self.word(token)?;
            }
        }
        Ok(FlagAction::Continue)
    }

    fn flag(&mut self, token: &str, allow_batch: bool) -> Result<FlagAction> {
        let body = &token[1..];
        let mut chars = body.chars();
        let selector = chars.next().map(|c| c.to_ascii_lowercase());
        let value = chars.as_str();

        match selector {
            Some('s') if value.eq_ignore_ascii_case("w") => self.toggle_mode(),
            Some('w') if value.is_empty() => self.toggle_mode(),
            Some('s') => self.session.mode = Mode::Stimulus,
            Some('r') => self.session.mode = Mode::Response,
            Some('f') if !value.is_empty() => match self.session.set_echo(value) {
                Ok(()) => eprintln!("echo file -> {} opened successfully", value),
                Err(e) => eprintln!("{}", e),
            },
            Some('t') => {
                self.session.tab_pad = !self.session.tab_pad;
                eprintln!("tab mode -> {}", self.session.tab_pad);
            }
            Some('d') => {
                self.session.demark = !self.session.demark;
                eprintln!("demark mode -> {}", self.session.demark);
            }
            Some('n') => {
                self.session.number = !self.session.number;
                eprintln!("number mode -> {}", self.session.number);
            }
            Some('l') => {
                self.session.limit = !self.session.limit;
                if !value.is_empty() {
                    let n = value.parse().unwrap_or(0);
                    self.session.limit_count = n;
                    if n > 0 {
                        self.session.limit = true;
                    }
                }
                eprintln!(
                    "limit mode -> {} ({})",
                    self.session.limit, self.session.limit_count
                );
            }
            Some('x') => self.dump()?,
            Some('a') => {
                about();
                return Ok(FlagAction::Done);
            }
            Some('i') if !value.is_empty() => {
                if allow_batch {
                    self.run_batch(value)?;
                } else {
                    warn!("nested batch execution rejected: {}", token);
                }
                return Ok(FlagAction::Done);
            }
            // -f and -i without an attached value do nothing.
            Some('f') | Some('i') => {}
            _ => {
                usage();
                return Ok(FlagAction::Done);
            }
        }
        Ok(FlagAction::Continue)
    }

    /// Look one cue up. Lookup failures are reported and do not stop the
    /// rest of the word list; only a database open failure propagates.
    fn word(&mut self, cue: &str) -> Result<()> {
        self.ensure_database()?;
        if let Some(db) = self.db.as_mut() {
            if let Err(e) = eat::look_up(db, &mut self.session, cue) {
                eprintln!("eatshow: {}", e);
            }
        }
        Ok(())
    }

    fn dump(&mut self) -> Result<()> {
        self.ensure_database()?;
        if let Some(db) = self.db.as_mut() {
            eat::dump_headwords(db, &mut self.session)?;
        }
        Ok(())
    }

    fn toggle_mode(&mut self) {
        let from = self.session.mode;
        self.session.mode = from.toggled();
        println!(
            "\t>>Mode switched from {} to {}",
            from.title(),
            self.session.mode.title()
        );
    }

    /// Open the database pair for the session mode, or switch an already
    /// open pair over to it.
    fn ensure_database(&mut self) -> Result<()> {
        match self.db {
            Some(ref mut db) => {
                if db.mode != self.session.mode {
                    db.switch(self.session.mode)?;
                }
                Ok(())
            }
            None => {
                self.db = Some(Database::open(self.session.mode)?);
                Ok(())
            }
        }
    }

    /// Read cue words from the prompt until an empty line or EOF.
    /// Switches typed at the prompt act in place, exactly as they do in
    /// a word list.
    fn interactive(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("Enter a word>");
            io::stdout().flush()?;
            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let token = line.trim().to_string();
            if token.is_empty() {
                break;
            }
            let action = if is_flag(&token) {
                self.flag(&token, true)?
            } else {
                self.word(&token)?;
                FlagAction::Continue
            };
            if let FlagAction::Done = action {
                break;
            }
        }
        Ok(())
    }

    /// Process an instruction file: each non-blank line is a fresh
    /// invocation with session state reset to defaults first.
    fn run_batch(&mut self, path: &str) -> Result<()> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(_) => {
                eprintln!("Error opening {}", path);
                return Ok(());
            }
        };
        for line in BufReader::new(file).lines() {
            let line = line?;
            let tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
            if tokens.is_empty() {
                continue;
            }
            // An instruction file must not itself invoke batch reading.
            if tokens.iter().any(|t| is_batch_flag(t)) {
                warn!("skipping batch instruction that invokes -i: {}", line.trim());
                continue;
            }
            self.session.reset();
            self.dispatch(&tokens, false)?;
        }
        self.session.reset();
        Ok(())
    }
}

fn is_flag(token: &str) -> bool {
    token.starts_with('-')
}

fn is_batch_flag(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next() == Some('-') && matches!(chars.next(), Some('i') | Some('I'))
}

/// On the very first run from this directory, drop a marker file and
/// point the user at the help switch.
fn check_first_run() {
    if Path::new(FIRST_RUN_MARKER).exists() {
        return;
    }
    if let Ok(mut marker) = OpenOptions::new()
        .append(true)
        .create(true)
        .open(FIRST_RUN_MARKER)
    {
        let _ = writeln!(
            marker,
            "eatshow initially run on this machine on {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M")
        );
    }
    eprintln!("==================================================================");
    eprintln!("Use eatshow -? at the command prompt for help on this application.");
    eprintln!("==================================================================");
}

fn usage() {
    println!("Usage: eatshow [-a -d -f -i -l -n -r -s -sw -t -x -?] [word_list]");
    println!("Find associates to words in the Edinburgh Associative Thesaurus");
    println!();
    println!("Outputs:");
    println!("\tThe total number of different answers, the count of");
    println!("\tall answers,  and  the list of triads of associated");
    println!("\ttypes, their individual frequencies, and proportion");
    println!("\tof occurrence.   The proportion of occurrence for a");
    println!("\tgiven type is its individual  frequency  divided by");
    println!("\tthe total count of all answers.");
    println!();
    println!("Switches:");
    println!("\t-a \t further info about this application");
    println!("\t-d \t turn off results demarcation");
    println!("\t-f<file> echo screen output to a file");
    println!("\t-i<file> reads/processes input from a file a line at a time");
    println!("\t-l<n>\t limits the number of outputs to <n>");
    println!("\t-n \t number outputs");
    println!("\t-r \t use cue as response");
    println!("\t-s \t use cue as stimulus(default)");
    println!("\t-sw\t toggles the -r/-s mode [without restart] (runtime switch)");
    println!("\t-t \t tab-delimit output [default is to use spaces]");
    println!("\t-x \t dumps the index wordlist for the current mode (runtime switch)");
    println!("\t-? \t display these options");
    println!();
    println!("NOTE: If -i or a word_list is used, eatshow does not enter interactive mode");
    println!();
    println!("In interactive mode, to return to the command prompt, simply hit return");
    println!("(do not enter a word). Alternately, enter Ctrl + Z");
}

fn about() {
    println!();
    println!("  ============================================================================");
    println!("    See http://www.eat.rl.ac.uk/");
    println!();
    println!("    Lookup tool for the Edinburgh Associative Thesaurus database files.");
    println!();
    println!("\t\t\teatshow v{}", env!("CARGO_PKG_VERSION"));
    println!("  ============================================================================");
    println!();
    println!("  Some 'option' examples:");
    println!();
    println!("    eatshow -n          ... numbers the results");
    println!();
    println!("    eatshow -ftest.txt  ... echo output to the file test.txt: file is appended");
    println!("                            to if it exists, or created anew if it does not");
    println!();
    println!("    eatshow man -sw man ... starts eatshow in non-interactive mode: first");
    println!("                            outputs the responses when 'man' was used as a");
    println!("                            stimulus, then toggles (-sw) eatshow into response");
    println!("                            mode, in which the output lists words which were");
    println!("                            used as a stimulus, and where 'man' was a response");
    println!();
    println!("    eatshow -r -t       ... starts eatshow in response mode, and instructs");
    println!("                            it to use tabs instead of spaces in its layouts");
    println!();
}
