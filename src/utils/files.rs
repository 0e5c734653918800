use std::{
    fs::{self, File},
    io::Read,
    path::Path,
};

pub fn file_exists(file_name: &str) -> bool {
    File::open(file_name).is_ok()
}

pub fn read_file(file_name: &str) -> std::io::Result<String> {
    let mut file = File::open(file_name)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/* Create the parent directories of a file path when they are missing */
pub fn create_directories_if_needed(path: &str) {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            let _ = fs::create_dir_all(parent);
        }
    }
}
