use std::error::Error;
use std::path::{Path, PathBuf};

use jotter::config::{Settings, SETTINGS_FILE};
use jotter::ui::Ui;
use jotter::{Session, Storage};


fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // The only (optional) argument is the path to the save file
    let data_file_arg = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::resolve(Path::new(SETTINGS_FILE), data_file_arg);

    let storage = Storage::new(&settings.data_file, settings.format);
    let mut session = Session::new(storage);

    let mut ui = Ui::stdio();
    ui.run(&mut session)?;
    Ok(())
}
