use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor,
};
use slidecode::{HighlightedText, SpanStyle};
use std::io::{self, Write};
use std::ops::Range;

/// Write `text` with ANSI styling. Text outside `focus` (character range) is dimmed.
pub fn write_highlighted(
    out: &mut impl Write,
    text: &HighlightedText,
    focus: Option<&Range<usize>>,
) -> io::Result<()> {
    for segment in text.segments() {
        let (start, end) = segment.range;
        let Some(focus) = focus else {
            write_part(out, segment.text, segment.style, false)?;
            continue;
        };

        // Split the segment at the focus boundaries.
        let cut_a = focus.start.clamp(start, end) - start;
        let cut_b = focus.end.clamp(start, end) - start;
        let a = byte_offset(segment.text, cut_a);
        let b = byte_offset(segment.text, cut_b);
        write_part(out, &segment.text[..a], segment.style, true)?;
        write_part(out, &segment.text[a..b], segment.style, false)?;
        write_part(out, &segment.text[b..], segment.style, true)?;
    }
    if !text.text().ends_with('\n') {
        queue!(out, Print('\n'))?;
    }
    Ok(())
}

/// Separator printed before each walkthrough state.
pub fn write_header(out: &mut impl Write, step: usize, total: usize) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Dim),
        Print(format!("── step {step}/{total} ──\n")),
        SetAttribute(Attribute::Reset),
    )
}

fn write_part(out: &mut impl Write, text: &str, style: &SpanStyle, dim: bool) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }

    if let Some(color) = style.color {
        queue!(
            out,
            SetForegroundColor(Color::Rgb {
                r: color.r,
                g: color.g,
                b: color.b,
            })
        )?;
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    queue!(out, Print(text), SetAttribute(Attribute::Reset), ResetColor)
}

fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map_or(text.len(), |(i, _)| i)
}
