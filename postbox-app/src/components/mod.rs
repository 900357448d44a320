pub(crate) mod create_form;
pub(crate) mod delete_button;
pub(crate) mod edit_form;
pub(crate) mod post_list;
pub(crate) mod search_bar;
pub(crate) mod sort_dropdown;
pub(crate) mod toast;
