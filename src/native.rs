//! libtidy-backed engine.
//!
//! Enabled with the `native` feature; links against the system `tidy`
//! library. The wrapper keeps the whole unsafe surface in this module:
//! everything above it talks to [`NativeEngine`] through the safe
//! [`Engine`] trait.

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int, c_uint, c_ulong, c_void};
use std::ptr;

use crate::engine::{Engine, SetOutcome};
use crate::registry::OptionId;

/// Opaque `TidyDoc` handle.
#[repr(C)]
struct TidyDocOpaque {
    _private: [u8; 0],
}

type TidyDoc = *mut TidyDocOpaque;

/// Mirror of libtidy's `TidyBuffer` from `tidybuffio.h`.
#[repr(C)]
struct TidyBuffer {
    allocator: *mut c_void,
    bp: *mut u8,
    size: c_uint,
    allocated: c_uint,
    next: c_uint,
}

#[link(name = "tidy")]
extern "C" {
    fn tidyCreate() -> TidyDoc;
    fn tidyRelease(tdoc: TidyDoc);
    fn tidyOptGetIdForName(name: *const c_char) -> c_int;
    fn tidyOptSetBool(tdoc: TidyDoc, opt: c_int, value: c_int) -> c_int;
    fn tidyOptGetBool(tdoc: TidyDoc, opt: c_int) -> c_int;
    fn tidyOptSetInt(tdoc: TidyDoc, opt: c_int, value: c_ulong) -> c_int;
    fn tidyOptGetInt(tdoc: TidyDoc, opt: c_int) -> c_ulong;
    fn tidyOptSetValue(tdoc: TidyDoc, opt: c_int, value: *const c_char) -> c_int;
    fn tidyOptGetValue(tdoc: TidyDoc, opt: c_int) -> *const c_char;
    fn tidySetErrorBuffer(tdoc: TidyDoc, buffer: *mut TidyBuffer) -> c_int;
    fn tidyBufClear(buffer: *mut TidyBuffer);
    fn tidyBufFree(buffer: *mut TidyBuffer);
}

/// libtidy's unknown-option sentinel (`N_TIDY_OPTIONS` falls out of range;
/// any negative id is refused by the set primitives).
const UNKNOWN_OPTION: c_int = -1;

/// One libtidy configuration session.
///
/// Owns the `TidyDoc` together with its diagnostic buffer; the buffer is
/// installed at creation so the first rejection is already readable. Both
/// are released when the engine is dropped.
///
/// A `NativeEngine` is not `Sync`: libtidy does not synchronize access to
/// a document internally. Distinct engines are independent and may live on
/// different threads.
pub struct NativeEngine {
    doc: TidyDoc,
    // Boxed so the address handed to tidySetErrorBuffer stays stable.
    errbuf: Box<TidyBuffer>,
}

impl NativeEngine {
    /// Create a fresh engine session.
    ///
    /// Returns `None` if libtidy fails to allocate a document.
    pub fn new() -> Option<Self> {
        let doc = unsafe { tidyCreate() };
        if doc.is_null() {
            return None;
        }
        let mut errbuf = Box::new(TidyBuffer {
            allocator: ptr::null_mut(),
            bp: ptr::null_mut(),
            size: 0,
            allocated: 0,
            next: 0,
        });
        unsafe {
            tidySetErrorBuffer(doc, &mut *errbuf);
        }
        Some(Self { doc, errbuf })
    }

    /// Resolve a symbolic id to libtidy's option id by canonical name.
    ///
    /// Name lookup keeps the registry independent of libtidy's internal
    /// enum numbering, which is not stable across engine versions.
    fn resolve(id: OptionId) -> c_int {
        match CString::new(id.name()) {
            Ok(name) => unsafe { tidyOptGetIdForName(name.as_ptr()) },
            Err(_) => UNKNOWN_OPTION,
        }
    }
}

impl Engine for NativeEngine {
    fn set_bool_option(&mut self, id: OptionId, value: bool) -> SetOutcome {
        let opt = Self::resolve(id);
        unsafe {
            let previous = tidyOptGetBool(self.doc, opt) != 0;
            if tidyOptSetBool(self.doc, opt, value as c_int) == 0 {
                return SetOutcome::Rejected;
            }
            if previous == value {
                SetOutcome::Unchanged
            } else {
                SetOutcome::Changed
            }
        }
    }

    fn set_int_option(&mut self, id: OptionId, value: u64) -> SetOutcome {
        let opt = Self::resolve(id);
        unsafe {
            let previous = tidyOptGetInt(self.doc, opt);
            if tidyOptSetInt(self.doc, opt, value as c_ulong) == 0 {
                return SetOutcome::Rejected;
            }
            if previous as u64 == value {
                SetOutcome::Unchanged
            } else {
                SetOutcome::Changed
            }
        }
    }

    fn set_string_option(&mut self, id: OptionId, value: &CStr) -> SetOutcome {
        let opt = Self::resolve(id);
        unsafe {
            // Read the current value before setting; the set call may
            // free the storage the returned pointer refers to.
            let previous = tidyOptGetValue(self.doc, opt);
            let unchanged = !previous.is_null() && CStr::from_ptr(previous) == value;
            if tidyOptSetValue(self.doc, opt, value.as_ptr()) == 0 {
                return SetOutcome::Rejected;
            }
            if unchanged {
                SetOutcome::Unchanged
            } else {
                SetOutcome::Changed
            }
        }
    }

    fn take_diagnostic(&mut self) -> Option<String> {
        if self.errbuf.bp.is_null() || self.errbuf.size == 0 {
            return None;
        }
        let text = unsafe {
            let bytes = std::slice::from_raw_parts(self.errbuf.bp, self.errbuf.size as usize);
            String::from_utf8_lossy(bytes).trim_end().to_string()
        };
        unsafe {
            tidyBufClear(&mut *self.errbuf);
        }
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl Drop for NativeEngine {
    fn drop(&mut self) {
        unsafe {
            tidyRelease(self.doc);
            tidyBufFree(&mut *self.errbuf);
        }
    }
}

// The session owns its handle and buffer outright; moving it between
// threads is fine as long as calls stay serialized, which `&mut self`
// already guarantees.
unsafe impl Send for NativeEngine {}
