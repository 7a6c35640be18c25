mod conf;

pub(crate) use conf::Conf;
