#[cfg(test)]
mod tests {
    use projman::libs::document::ProjectDocument;
    use projman::libs::error::DocumentError;
    use projman::libs::project::{Bookmark, QuickNote};

    #[test]
    fn test_bookmarks_add_and_delete() {
        let mut document = ProjectDocument::new();
        assert_eq!(document.add_bookmark(Bookmark::new("One", "https://one.example")), 0);
        assert_eq!(document.add_bookmark(Bookmark::new("Two", "https://two.example")), 1);
        assert_eq!(document.add_bookmark(Bookmark::new("Three", "https://three.example")), 2);

        let removed = document.delete_bookmarks([1]).unwrap();
        assert_eq!(removed[0].title, "Two");
        let titles: Vec<&str> = document.project().bookmarks.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Three"]);
    }

    #[test]
    fn test_bookmark_delete_out_of_range() {
        let mut document = ProjectDocument::new();
        document.add_bookmark(Bookmark::new("One", "https://one.example"));

        let err = document.delete_bookmarks([0, 1]).unwrap_err();
        assert!(matches!(err, DocumentError::IndexOutOfRange { index: 1, len: 1 }));
        assert_eq!(document.project().bookmarks.len(), 1);
    }

    #[test]
    fn test_quick_notes_add_and_delete() {
        let mut document = ProjectDocument::new();
        document.add_quick_note(QuickNote::new("a", "first"));
        document.add_quick_note(QuickNote::new("b", "second"));
        document.add_quick_note(QuickNote::new("c", "third"));

        document.delete_quick_notes([0, 2]).unwrap();
        assert_eq!(document.project().quick_notes, vec![QuickNote::new("b", "second")]);

        assert!(document.delete_quick_notes([5]).unwrap_err().is_index_out_of_range());
        assert_eq!(document.project().quick_notes.len(), 1);
    }

    #[test]
    fn test_collections_round_trip() {
        let mut document = ProjectDocument::new();
        document.add_bookmark(Bookmark::new("Docs", "https://docs.rs"));
        document.add_quick_note(QuickNote::new("Idea", "Keyboard shortcuts"));

        let reopened = ProjectDocument::open(Some(document.save().unwrap().as_slice())).unwrap();
        assert_eq!(reopened.project().bookmarks, document.project().bookmarks);
        assert_eq!(reopened.project().quick_notes, document.project().quick_notes);
    }
}
