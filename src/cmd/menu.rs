use blendspec::blend::Result;
use blendspec::export::ExportMenu;

/// List registered export actions.
pub fn run(menu: &ExportMenu) -> Result<()> {
	for entry in menu.entries() {
		println!("{}\t{}", entry.id, entry.label);
	}
	Ok(())
}
