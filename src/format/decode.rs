use crate::{
    format::{
        COMP_PIXEL_ASPECT_RATIO, LAYER, SOURCE_HEIGHT, SOURCE_PIXEL_ASPECT_RATIO, SOURCE_WIDTH,
        TERMINATOR, TIME_REMAP, TRANSFORM, UNITS_PER_SECOND, argb_to_rgba, cursor::LineCursor,
    },
    foundation::error::{KeyframeError, KeyframeResult},
    model::{
        document::{Document, Layer, Transform, TransformProperty},
        keyframe::{Keyframe, KeyframeValue, Track, TrackValue},
    },
};

const COLOR_CHANNELS: usize = 4;

/// Data rows of one block, tagged with their line numbers.
type Rows = Vec<(usize, Keyframe)>;

/// Decode keyframe text into a [`Document`].
///
/// Header fields missing from the input stay zero. Fails with
/// [`KeyframeError::Structural`] when a property block precedes every `Layer` line and with
/// [`KeyframeError::UnexpectedEnd`] when the text ends before `End of Keyframe Data`.
/// Time remap and transform rows must match their track type (a scalar, or three values for
/// anchor point, position and scale), otherwise [`KeyframeError::Shape`]; a field that is not
/// a number fails with [`KeyframeError::InvalidNumber`].
#[tracing::instrument(skip(text), fields(bytes = text.len()))]
pub fn decode(text: &str) -> KeyframeResult<Document> {
    let mut lines = LineCursor::new(text);
    let mut doc = Document::default();

    read_header(&mut lines, &mut doc)?;

    let mut layer: Option<Layer> = None;
    while !lines.finished() {
        match lines.current()? {
            LAYER => {
                if let Some(done) = layer.replace(Layer::default()) {
                    doc.layers.push(done);
                }
                lines.next();
            }
            TERMINATOR => {
                doc.layers.extend(layer);
                tracing::debug!(layers = doc.layers.len(), "decoded keyframe data");
                return Ok(doc);
            }
            header => {
                let Some(current) = layer.as_mut() else {
                    return Err(KeyframeError::Structural {
                        line: lines.line_number(),
                        header: header.to_string(),
                    });
                };
                read_block(&mut lines, current)?;
            }
        }
    }

    Err(KeyframeError::unexpected_end(format!("missing `{TERMINATOR}` line")))
}

/// Read `key<TAB>value` lines up to the first line starting with `Layer`.
fn read_header(lines: &mut LineCursor<'_>, doc: &mut Document) -> KeyframeResult<()> {
    loop {
        if lines.finished() {
            return Err(KeyframeError::unexpected_end(
                "header is not followed by a `Layer` line",
            ));
        }
        let line = lines.current()?;
        if line.starts_with(LAYER) {
            return Ok(());
        }

        let number = lines.line_number();
        let mut fields = line.split('\t');
        let key = fields.next().unwrap_or_default();
        let value = fields.next().unwrap_or_default();
        match key {
            UNITS_PER_SECOND => doc.frame_rate = parse_int(value, number)?,
            SOURCE_WIDTH => doc.comp_size[0] = parse_int(value, number)?,
            SOURCE_HEIGHT => doc.comp_size[1] = parse_int(value, number)?,
            SOURCE_PIXEL_ASPECT_RATIO => {
                doc.source_pixel_aspect_ratio = parse_float(value, number)?
            }
            COMP_PIXEL_ASPECT_RATIO => doc.comp_pixel_aspect_ratio = parse_float(value, number)?,
            _ => tracing::trace!(key, "ignoring header line"),
        }
        lines.next();
    }
}

/// Read one property block (header, label row, data rows) into `layer`.
///
/// Leaves the cursor on the first dedented line after the block.
fn read_block(lines: &mut LineCursor<'_>, layer: &mut Layer) -> KeyframeResult<()> {
    let mut fields = lines.current()?.split('\t');
    let kind = fields.next().unwrap_or_default();
    let name = fields.next().unwrap_or_default();
    let property = fields.next().unwrap_or_default();

    // The label row starts with `Frame`; the remaining labels count the value columns.
    let labels = lines.next().current()?.split('\t').skip(1).count();
    let columns = (labels > 0).then_some(labels);
    let rows = read_rows(lines, columns)?;
    tracing::trace!(kind, name, property, rows = rows.len(), "read block");

    match kind {
        TIME_REMAP => layer.time_remap = Some(typed(rows, TIME_REMAP)?),
        TRANSFORM => {
            let transform = layer.transform.get_or_insert_with(Transform::default);
            let Some(prop) = TransformProperty::from_label(name) else {
                tracing::debug!(name, "dropping unknown transform property");
                return Ok(());
            };
            let label = format!("{TRANSFORM} {}", prop.label());
            match prop {
                TransformProperty::AnchorPoint => {
                    transform.anchor_point = Some(typed(rows, &label)?)
                }
                TransformProperty::Position => transform.position = Some(typed(rows, &label)?),
                TransformProperty::Rotation => transform.rotation = Some(typed(rows, &label)?),
                TransformProperty::Scale => transform.scale = Some(typed(rows, &label)?),
                TransformProperty::Opacity => transform.opacity = Some(typed(rows, &label)?),
            }
        }
        _ => layer.insert_effect(name, property, rows.into_iter().map(|(_, k)| k).collect()),
    }
    Ok(())
}

/// Advance through indented rows; stops on the first line at indent 0 (or past the end).
fn read_rows(lines: &mut LineCursor<'_>, columns: Option<usize>) -> KeyframeResult<Rows> {
    let mut rows = Vec::new();
    while lines.next().indent() > 0 {
        let number = lines.line_number();
        let mut fields = lines.current()?.split('\t');
        let frame = parse_float(fields.next().unwrap_or_default(), number)?;
        let values = fields
            .map(|f| parse_float(f, number))
            .collect::<KeyframeResult<Vec<_>>>()?;
        rows.push((number, Keyframe::new(frame, row_value(values, columns))));
    }
    Ok(rows)
}

/// Apply the color and scalar rules to one row.
///
/// `columns` comes from the label row; without labels the row's own width decides.
fn row_value(values: Vec<f64>, columns: Option<usize>) -> KeyframeValue {
    if columns.unwrap_or(values.len()) == COLOR_CHANNELS {
        if let Ok(argb) = <[f64; COLOR_CHANNELS]>::try_from(values.as_slice()) {
            return KeyframeValue::Vector(argb_to_rgba(argb).to_vec());
        }
    }
    KeyframeValue::from_components(values)
}

fn typed<T: TrackValue>(rows: Rows, property: &str) -> KeyframeResult<Track<T>> {
    rows.into_iter()
        .map(|(line, k)| {
            T::from_value(k.value)
                .map(|value| Keyframe::new(k.frame, value))
                .ok_or_else(|| KeyframeError::Shape {
                    line,
                    property: property.to_string(),
                    expected: T::SHAPE,
                })
        })
        .collect()
}

fn parse_float(text: &str, line: usize) -> KeyframeResult<f64> {
    text.trim()
        .parse()
        .map_err(|_| KeyframeError::InvalidNumber {
            line,
            text: text.to_string(),
        })
}

fn parse_int(text: &str, line: usize) -> KeyframeResult<u32> {
    if let Ok(v) = text.trim().parse::<u32>() {
        return Ok(v);
    }
    // Fractional values keep their integer part.
    let v = parse_float(text, line)?;
    if (0.0..=f64::from(u32::MAX)).contains(&v) {
        Ok(v.trunc() as u32)
    } else {
        Err(KeyframeError::InvalidNumber {
            line,
            text: text.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/format/decode.rs"]
mod tests;
