use uuid::Uuid;

/// Objects carrying a stable identity that survives clones and value updates.
pub trait ObjectWithUUID {
    fn uuid(&self) -> &Uuid;

    fn is_same_object(&self, other: &dyn ObjectWithUUID) -> bool {
        self.uuid() == other.uuid()
    }
}
