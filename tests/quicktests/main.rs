mod codec;
mod op;
mod ordered;
mod playback;

pub(crate) use op::Op;
