use super::prelude::*;
use crate::util::validate::NewGroup;

/// Validates the entered group and assigns the next free number.
pub fn add_group(existing: &[Group], name: &str, codes: &str) -> Result<Group> {
    let new_group = NewGroup {
        name,
        codes,
        existing,
    };
    let zip_codes = new_group.validate_and_parse()?;
    let number = existing.iter().map(|g| g.id.number()).max().unwrap_or(0) + 1;
    let id = GroupId::new(number).ok_or(Error::GroupLimit(Color::PALETTE_SIZE))?;
    let group = Group::new(id, name, zip_codes)
        .ok_or(Error::GroupLimit(Color::PALETTE_SIZE))?;
    log::debug!("Added group {} '{}'", group.id, group.name);
    Ok(group)
}
