//! Windows focus-assist probe
//!
//! Focus assist has no documented query API; like every desktop shell
//! that needs it, we read the WNF quiet-hours state
//! (`WNF_SHEL_QUIETHOURS_ACTIVE_PROFILE_CHANGED`) through
//! `NtQueryWnfStateData` from ntdll.

use async_trait::async_trait;

use crate::application::ports::{DndError, DndProbe};
use crate::domain::notification::{DndState, FocusAssistLevel};

/// DND probe backed by the Windows focus-assist level.
///
/// `is_priority_app` is whether the application is on the focus-assist
/// priority allow-list; it decides suppression at level 1.
pub struct FocusAssistProbe {
    is_priority_app: bool,
}

impl FocusAssistProbe {
    pub fn new(is_priority_app: bool) -> Self {
        Self { is_priority_app }
    }
}

#[async_trait]
impl DndProbe for FocusAssistProbe {
    async fn state(&self) -> Result<DndState, DndError> {
        let is_priority_app = self.is_priority_app;
        // The WNF query is a blocking syscall
        tokio::task::spawn_blocking(move || {
            let raw = query_raw_level()?;
            Ok(FocusAssistLevel::from_raw(raw).suppresses(is_priority_app))
        })
        .await
        .map_err(|e| DndError::FocusAssistUnavailable(format!("Task join error: {}", e)))?
    }
}

#[cfg(windows)]
fn query_raw_level() -> Result<i32, DndError> {
    use windows_sys::Win32::System::LibraryLoader::{GetModuleHandleA, GetProcAddress};

    // WNF_SHEL_QUIETHOURS_ACTIVE_PROFILE_CHANGED
    const QUIET_HOURS_STATE: [u32; 2] = [0xA3BF_5075, 0x0D83_063E];

    type NtQueryWnfStateData = unsafe extern "system" fn(
        state_name: *const [u32; 2],
        type_id: *const core::ffi::c_void,
        explicit_scope: *const core::ffi::c_void,
        change_stamp: *mut u32,
        buffer: *mut core::ffi::c_void,
        buffer_size: *mut u32,
    ) -> i32;

    unsafe {
        let ntdll = GetModuleHandleA(b"ntdll.dll\0".as_ptr());
        if ntdll.is_null() {
            return Err(DndError::FocusAssistUnavailable(
                "ntdll.dll not loaded".to_string(),
            ));
        }

        let query = GetProcAddress(ntdll, b"NtQueryWnfStateData\0".as_ptr()).ok_or_else(
            || DndError::FocusAssistUnavailable("NtQueryWnfStateData not found".to_string()),
        )?;
        let query: NtQueryWnfStateData = std::mem::transmute(query);

        let mut change_stamp: u32 = 0;
        let mut level: i32 = 0;
        let mut size: u32 = std::mem::size_of::<i32>() as u32;

        let status = query(
            &QUIET_HOURS_STATE,
            std::ptr::null(),
            std::ptr::null(),
            &mut change_stamp,
            &mut level as *mut i32 as *mut core::ffi::c_void,
            &mut size,
        );

        if status != 0 {
            return Err(DndError::FocusAssistUnavailable(format!(
                "NtQueryWnfStateData returned 0x{:08X}",
                status
            )));
        }

        Ok(level)
    }
}

#[cfg(not(windows))]
fn query_raw_level() -> Result<i32, DndError> {
    Err(DndError::FocusAssistUnavailable(
        "focus assist only exists on Windows".to_string(),
    ))
}
