// Wake-on-LAN
//
// HERO4+ cameras sleep with the radio half-awake and wake on the standard
// magic packet: six 0xFF bytes followed by the target MAC sixteen times,
// broadcast over UDP to port 9.

use std::fmt;
use std::io;
use std::net::Ipv4Addr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tokio::net::UdpSocket;

const WOL_PORT: u16 = 9;

/// A 48-bit hardware address, parsed from the usual `aa:bb:cc:dd:ee:ff`
/// notation (`-` separators are accepted too).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MacAddr(pub [u8; 6]);

impl FromStr for MacAddr {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut octets = [0u8; 6];
        let mut parts = s.split(|c| c == ':' || c == '-');
        for octet in &mut octets {
            let part = parts
                .next()
                .ok_or_else(|| format!("'{s}' is not a MAC address (too few octets)"))?;
            *octet = u8::from_str_radix(part, 16)
                .map_err(|_| format!("'{s}' is not a MAC address (bad octet '{part}')"))?;
        }
        if parts.next().is_some() {
            return Err(format!("'{s}' is not a MAC address (too many octets)"));
        }
        Ok(Self(octets))
    }
}

impl TryFrom<String> for MacAddr {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MacAddr> for String {
    fn from(mac: MacAddr) -> Self {
        mac.to_string()
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

/// Broadcast one magic packet for `mac`.
///
/// Fire and forget: UDP gives no delivery signal, and the camera takes a few
/// seconds to boot after waking. Callers poll with a real command if they
/// need confirmation.
pub async fn wake(mac: MacAddr) -> io::Result<()> {
    let mut packet = [0u8; 6 + 16 * 6];
    packet[..6].fill(0xff);
    for chunk in packet[6..].chunks_exact_mut(6) {
        chunk.copy_from_slice(&mac.0);
    }

    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).await?;
    socket.set_broadcast(true)?;
    socket
        .send_to(&packet, (Ipv4Addr::BROADCAST, WOL_PORT))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_colon_and_dash_notation() {
        let expected = MacAddr([0xaa, 0xbb, 0xcc, 0x00, 0x11, 0x22]);
        assert_eq!("aa:bb:cc:00:11:22".parse::<MacAddr>().ok(), Some(expected));
        assert_eq!("AA-BB-CC-00-11-22".parse::<MacAddr>().ok(), Some(expected));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!("aa:bb:cc:00:11".parse::<MacAddr>().is_err());
        assert!("aa:bb:cc:00:11:22:33".parse::<MacAddr>().is_err());
        assert!("aa:bb:cc:00:11:zz".parse::<MacAddr>().is_err());
        assert!("".parse::<MacAddr>().is_err());
    }

    #[test]
    fn displays_lowercase_colons() {
        let mac = MacAddr([0xd6, 0x04, 0x12, 0x34, 0xab, 0xcd]);
        assert_eq!(mac.to_string(), "d6:04:12:34:ab:cd");
    }
}
