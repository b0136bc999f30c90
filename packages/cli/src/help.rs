/// Explanation of the centralized authorization model, shown by `about`
/// and as the long help of the binary
pub const CENTRALIZED_MODEL_HELP: &str = "\
In the centralized model, clients are granted access to devices by a central
service operated by the vendor. That service usually exposes an HTTP endpoint
that hands out access tokens, which clients then present to the Nabto WebRTC
service to authorize themselves. The full flow:

1. The client obtains a signed JWT from the authorization service
   (this tool mocks that part).
2. The client uses the JWT to request a connection to the device.
3. Nabto WebRTC validates the token with the public key of the key pair that
   was used to sign it.

Tokens produced here are meant for testing. In production, host your own
service and keep its private key on a server.

More details: https://docs.nabto.com/developer/webrtc/guides/security/central-auth.html";
