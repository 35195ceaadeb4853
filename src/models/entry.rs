/// Anything stored in one of the tracker tables.
///
/// The id is assigned by the store on insert; a record that has not been
/// stored yet carries `0`.
pub trait Entry {
    fn id(&self) -> i64;
}
