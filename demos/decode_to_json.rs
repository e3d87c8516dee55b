use ae_keyframe::{KeyframeSource, decode, encode};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let text = include_str!("../tests/data/full_layer.txt");
    let doc = decode(text)?;
    doc.validate()?;
    println!("{}", doc.to_json_pretty()?);

    let partial = KeyframeSource::new(doc.frame_rate, doc.layers);
    print!("{}", encode(&partial));

    Ok(())
}
