//! Legal notice text
//!
//! Fixed strings shown by the consent dialog.

/// Settings key under which acceptance is recorded
pub const LEGAL_NOTICE_KEY: &str = "KodeBeagleIdeaLegalNotice";

/// Id of the plugin disabled when the notice is declined
pub const PLUGIN_ID: &str = "kodebeagleidea";

pub const LEGAL_NOTICE_TITLE: &str = "Kode Beagle";
pub const ACCEPT_LABEL: &str = "Accept";
pub const DECLINE_LABEL: &str = "Decline";
pub const CANCEL_LABEL: &str = "Cancel";

/// Preferred size of the message region, in pixels
pub const MESSAGE_SIZE: (u32, u32) = (500, 100);

/// Rich-text body of the notice
pub const LEGAL_NOTICE_MESSAGE: &str = concat!(
    "\n  <b>IMPORTANT: BY ACCESSING AND USING KODE BEAGLE IDEA PLUGIN, ",
    "YOU AGREE TO THE CERTAIN TERMS AND CONDITIONS \n  ",
    "SET FORTH IN THE END-USER LICENSE AGREEMENT AND QUOTED BELOW. ",
    "IF YOU DO NOT AGREE WITH THESE TERMS OR CONDITIONS, \n  ",
    "DO NOT ACCESS OR USE KODE BEAGLE.</b>\n  <br><br> \n\n",
    "  The Software includes code crawling functionality (\"Kode Beagle\") <br>",
    "that enables searching source code from the open source github projects. ",
    "Licensee acknowledges source code might be protected by copyright and ",
    "trademark laws. \n Before using Kode Beagle, Licensee should make sure that ",
    "copying of source code is not prohibited by the applicable license agreement ",
    "(except to the extent that Licensee may be expressly permitted under ",
    "applicable law) \n   or that Licensee has obtained permission to copy the ",
    "source code from the copyright owner.\n\n",
    "  Using Kode Beagle is entirely optional. Licensor does neither encourage ",
    "nor condone \n the use of Kode Beagle, and disclaims any liability for ",
    "Licensee's use of Kode Beagle \n in violation of applicable laws.\n",
    "<br><br><b>Declining/Cancelling this will disable Kode Beagle ",
    "and restart Idea</b>",
);

/// Wrap a message body in the margin container the dialog renders.
pub fn wrap_body(message: &str) -> String {
    format!("<div style='margin:5px;'>{message}</div>")
}
