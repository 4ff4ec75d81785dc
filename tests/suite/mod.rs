mod config_file;
mod round_flow;
mod selection;
