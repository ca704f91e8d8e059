use std::io::{self, Write};

use ansi_term::Colour::{Blue};
use clap::{Parser};
use wobject_dyn::{self as wd, Value, Render, identity, add_integers, range};
use wd::{make_object, make_integer, make_list};

// ----------------------------------------------------------------------------

/// Demonstrates the dynamic object model.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The deepest nesting of lists to render. Unbounded if omitted.
    #[arg(long)]
    max_depth: Option<usize>,

    /// Do not colour section headings.
    #[arg(long)]
    no_colour: bool,

    /// Arguments `START STOP STEP` for the range demonstration.
    #[arg(long, num_args = 3, allow_negative_numbers = true, default_values_t = [0, 10, 1])]
    range: Vec<i64>,
}

/// Writes labelled renderings of `Value`s.
struct Demo<W> {
    output: W,
    render: Render,
    colour: bool,
}

impl<W: Write> Demo<W> {
    fn heading(&mut self, title: &str) -> io::Result<()> {
        if self.colour {
            writeln!(self.output, "\n{}", Blue.paint(title))
        } else {
            writeln!(self.output, "\n{}", title)
        }
    }

    /// Writes the rendering and identity of `value`.
    fn show(&mut self, value: &Value) -> anyhow::Result<()> {
        writeln!(self.output, "str: {}", self.render.str(value)?)?;
        writeln!(self.output, "id: {}", identity(value))?;
        Ok(())
    }

    fn run(&mut self, args: &Args) -> anyhow::Result<()> {
        self.heading("Object")?;
        let object = make_object();
        self.show(&object)?;
        object.destroy_object();

        self.heading("Integer")?;
        let integer = make_integer(5);
        self.show(&integer)?;
        integer.destroy_integer();

        let (x, y) = (make_integer(9), make_integer(8));
        let sum = add_integers(&x, &y)?;
        writeln!(self.output, "sum ({} + {}): {}", x, y, sum)?;

        self.heading("List (empty)")?;
        let mut list = make_list();
        self.show(&list)?;

        self.heading("List (prepended)")?;
        list.list_mut().prepend(&make_integer(100));
        self.show(&list)?;

        self.heading("List (appended)")?;
        list.list_mut().append(&make_object());
        self.show(&list)?;
        list.destroy_list();

        let [start, stop, step] = args.range[..] else {
            anyhow::bail!("--range needs exactly three values");
        };
        self.heading(&format!("range({},{},{})", start, stop, step))?;
        let numbers = range(start, stop, step)?;
        writeln!(self.output, "{}", self.render.str(&numbers)?)?;
        numbers.destroy_list();

        self.heading("Iterating through range(65,75,1)")?;
        let letters = range(65, 75, 1)?;
        for number in letters.list() {
            let i = number.as_integer()?;
            let c = u8::try_from(i).map(char::from).unwrap_or('?');
            write!(self.output, "{}:{} ", i, c)?;
        }
        writeln!(self.output)?;
        letters.destroy_list();

        self.heading("Print loop")?;
        let numbers = range(0, 5 + 10, 1)?;
        for index in 0..numbers.list().len() {
            let number = numbers.list().get(index)?;
            writeln!(self.output, "{}", self.render.str(number)?)?;
        }
        numbers.destroy();
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::debug!("{:?}", args);
    let mut demo = Demo {
        output: io::stdout().lock(),
        render: Render {max_depth: args.max_depth},
        colour: !args.no_colour,
    };
    demo.run(&args)
}
