//! Gesture scripts.
//!
//! One directive per line. Blank lines and lines starting with `#` are
//! skipped. Other directives may end in a `#` comment, except `value`: its
//! payload runs to the end of the line since hex colors start with `#`.
//!
//! ```text
//! size 260 48
//! value linear-gradient(135deg, rgb(6,147,227) 0%, rgb(155,81,224) 100%)
//! move 109.5
//! down 109.5
//! up 109.5
//! commit 0 0 0 1
//! dump
//! ```
//!
//! Pointer directives take an x coordinate and an optional y; y defaults to
//! the vertical center of the viewport.

use anyhow::{anyhow, bail, Context, Result};
use gradient_engine::input::Key;
use gradient_ui::prelude::RgbaColor;

#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Size { width: f32, height: f32 },
    Value(String),
    Move { x: f32, y: Option<f32> },
    Down { x: f32, y: Option<f32> },
    Up { x: f32, y: Option<f32> },
    Leave,
    Blur,
    Commit(RgbaColor),
    Remove,
    Dismiss,
    Key(Key),
    Dump,
}

/// A directive with the 1-based line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub number: usize,
    pub directive: Directive,
}

pub fn parse_script(src: &str) -> Result<Vec<Line>> {
    src.lines()
        .enumerate()
        .filter_map(|(i, raw)| {
            let text = strip_comment(raw.trim());
            (!text.is_empty()).then_some((i + 1, text))
        })
        .map(|(number, text)| {
            parse_directive(text)
                .with_context(|| format!("line {number}: {text}"))
                .map(|directive| Line { number, directive })
        })
        .collect()
}

fn strip_comment(line: &str) -> &str {
    if line.starts_with('#') {
        return "";
    }
    if line.split_whitespace().next() == Some("value") {
        return line;
    }
    line.split_once('#').map_or(line, |(code, _)| code.trim_end())
}

fn parse_directive(text: &str) -> Result<Directive> {
    let (word, rest) = text.split_once(char::is_whitespace).unwrap_or((text, ""));
    let rest = rest.trim();
    let args: Vec<&str> = rest.split_whitespace().collect();

    let directive = match word {
        "size" => {
            let [w, h] = numbers::<2>(&args)?;
            Directive::Size { width: w, height: h }
        }
        // The gradient itself contains spaces and commas: take the rest verbatim.
        "value" => {
            if rest.is_empty() {
                bail!("`value` needs a gradient string");
            }
            Directive::Value(rest.to_string())
        }
        "move" | "down" | "up" => {
            let (x, y) = point(&args)?;
            match word {
                "move" => Directive::Move { x, y },
                "down" => Directive::Down { x, y },
                _ => Directive::Up { x, y },
            }
        }
        "leave" => no_args(&args, Directive::Leave)?,
        "blur" => no_args(&args, Directive::Blur)?,
        "commit" => {
            let [r, g, b, a] = numbers::<4>(&args)?;
            Directive::Commit(RgbaColor::new(r.into(), g.into(), b.into(), a.into()))
        }
        "remove" => no_args(&args, Directive::Remove)?,
        "dismiss" => no_args(&args, Directive::Dismiss)?,
        "key" => {
            let [name] = args.as_slice() else { bail!("`key` takes one key name") };
            Directive::Key(Key::from_name(name).ok_or_else(|| anyhow!("unknown key `{name}`"))?)
        }
        "dump" => no_args(&args, Directive::Dump)?,
        other => bail!("unknown directive `{other}`"),
    };
    Ok(directive)
}

fn no_args(args: &[&str], directive: Directive) -> Result<Directive> {
    if !args.is_empty() {
        bail!("unexpected arguments {args:?}");
    }
    Ok(directive)
}

fn point(args: &[&str]) -> Result<(f32, Option<f32>)> {
    match args {
        [x] => Ok((number(x)?, None)),
        [x, y] => Ok((number(x)?, Some(number(y)?))),
        _ => bail!("expected `x [y]`, got {} arguments", args.len()),
    }
}

fn numbers<const N: usize>(args: &[&str]) -> Result<[f32; N]> {
    if args.len() != N {
        bail!("expected {N} numbers, got {}", args.len());
    }
    let mut out = [0.0; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = number(arg)?;
    }
    Ok(out)
}

fn number(arg: &str) -> Result<f32> {
    let v: f32 = arg.parse().with_context(|| format!("`{arg}` is not a number"))?;
    if !v.is_finite() {
        bail!("`{arg}` is not finite");
    }
    Ok(v)
}
