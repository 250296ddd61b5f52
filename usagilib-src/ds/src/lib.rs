use inner::doc_inline_reexport;

doc_inline_reexport! {
    ring_deque,
    union_find,
    union_find_label,
}
