use std::fs::File;
use std::io::{ self, BufReader, BufWriter, Write };
use std::process;

use clap::{ Parser, ValueEnum };
use simplelog::{ Config, LevelFilter, TermLogger, TerminalMode };

use m400dis::*;

#[derive(Parser, Debug)]
#[clap(
	name = "m400dis",
	version,
	about = "Prints an assembly listing of a 16-bit machine code image"
)]
struct Args {
	/// Address of the first word.
	#[arg(short, long, default_value = "0", value_parser = parse_addr)]
	start: usize,

	/// Where to write the listing (default: stdout).
	#[arg(short, long)]
	output: Option<String>,

	/// Input format.
	#[arg(short, long, value_enum, default_value_t = Format::Auto)]
	format: Format,

	/// Don't print addresses.
	#[arg(short = 'A', long)]
	no_addresses: bool,

	/// Don't print raw values in comments.
	#[arg(short = 'n', long)]
	no_values: bool,

	/// Print mnemonics in lowercase.
	#[arg(short, long)]
	lowercase: bool,

	/// More logging (-v debug, -vv trace).
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,

	input: String,
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
enum Format {
	/// EMELF if it parses, raw otherwise.
	Auto,
	Emelf,
	Raw,
}

fn parse_addr(s: &str) -> Result<usize, String> {
	let res = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
		Some(hex) => usize::from_str_radix(hex, 16),
		None      => s.parse(),
	};

	res.map_err(|e| format!("bad address '{}': {}", s, e))
}

fn main() {
	better_panic::install();
	let args = Args::parse();

	let level = match args.verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	};

	if TermLogger::init(level, Config::default(), TerminalMode::Stderr).is_err() {
		eprintln!("couldn't set up logging");
	}

	if let Err(e) = run(&args) {
		log::error!("{}", e);
		process::exit(1);
	}
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
	let mut input = BufReader::new(File::open(&args.input)?);

	let mut image = match args.format {
		Format::Auto  => load_image(&mut input, args.start)?,
		Format::Emelf => load_image_as(&EmelfLoader.into(), &mut input, args.start)?,
		Format::Raw   => load_image_as(&RawLoader.into(), &mut input, args.start)?,
	};

	let decoder: Decoder = DataDecoder.into();
	decoder.decode_image(&mut image, args.start);

	let config = ListingConfig::new()
		.with_skip_addresses(args.no_addresses)
		.with_skip_values(args.no_values)
		.with_lowercase_mnemonics(args.lowercase);

	let mut out: Box<dyn Write> = match &args.output {
		Some(path) => Box::new(BufWriter::new(File::create(path)?)),
		None       => Box::new(BufWriter::new(io::stdout())),
	};

	write_listing(&image, &config, &mut *out)?;
	Ok(())
}
